//! Echo Nest dynamic playlist codes.
//!
//! Controls of an Echo Nest generator store their "match" as an integer code.
//! Depending on the control it is either an [`ArtistTypeEnum`] value (for
//! `Artist` controls) or a [`PlaylistParam`] value.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Generator type tag of the only generator that can be turned into a link.
pub const ECHONEST_GENERATOR: &str = "echonest";

/// Kind of playlist the Echo Nest backend generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum ArtistTypeEnum {
    ArtistType = 0,
    ArtistRadioType = 1,
    ArtistDescriptionType = 2,
    CatalogType = 3,
    CatalogRadioType = 4,
    SongRadioType = 5,
}

/// Parameters accepted by the Echo Nest dynamic playlist API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum PlaylistParam {
    Type = 0,
    Format = 1,
    Pick = 2,
    Variety = 3,
    ArtistId = 4,
    Artist = 5,
    ArtistSeedCatalog = 6,
    SourceCatalog = 7,
    SongId = 8,
    Description = 9,
    Results = 10,
    MaxTempo = 11,
    MinTempo = 12,
    MaxDuration = 13,
    MinDuration = 14,
    MaxLoudness = 15,
    MinLoudness = 16,
    ArtistMaxFamiliarity = 17,
    ArtistMinFamiliarity = 18,
    ArtistMaxHotttnesss = 19,
    ArtistMinHotttnesss = 20,
    SongMaxHotttnesss = 21,
    SongMinHotttnesss = 22,
    ArtistMinLongitude = 23,
    ArtistMaxLongitude = 24,
    ArtistMinLatitude = 25,
    ArtistMaxLatitude = 26,
    Mode = 27,
    Key = 28,
    SongInformation = 29,
    Sort = 30,
    Limit = 31,
    Audio = 32,
    Dmca = 33,
    ChainXspf = 34,
    Mood = 35,
    Style = 36,
    Adventurousness = 37,
    MinDanceability = 38,
    MaxDanceability = 39,
    MinEnergy = 40,
    MaxEnergy = 41,
}

impl PlaylistParam {
    /// Decodes a control match code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }

    /// Returns true for parameters that express an upper bound.
    pub fn is_max(self) -> bool {
        matches!(
            self,
            Self::MaxTempo
                | Self::MaxDuration
                | Self::MaxLoudness
                | Self::MaxDanceability
                | Self::MaxEnergy
                | Self::ArtistMaxFamiliarity
                | Self::ArtistMaxHotttnesss
                | Self::SongMaxHotttnesss
                | Self::ArtistMaxLatitude
                | Self::ArtistMaxLongitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip_known() {
        assert_eq!(PlaylistParam::from_code(11), Some(PlaylistParam::MaxTempo));
        assert_eq!(i32::from(PlaylistParam::MaxEnergy), 41);
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(PlaylistParam::from_code(-1), None);
        assert_eq!(PlaylistParam::from_code(1000), None);
    }

    #[test]
    fn test_max_params() {
        let max: Vec<PlaylistParam> = (0..=41)
            .filter_map(PlaylistParam::from_code)
            .filter(|p| p.is_max())
            .collect();

        assert_eq!(
            max,
            vec![
                PlaylistParam::MaxTempo,
                PlaylistParam::MaxDuration,
                PlaylistParam::MaxLoudness,
                PlaylistParam::ArtistMaxFamiliarity,
                PlaylistParam::ArtistMaxHotttnesss,
                PlaylistParam::SongMaxHotttnesss,
                PlaylistParam::ArtistMaxLongitude,
                PlaylistParam::ArtistMaxLatitude,
                PlaylistParam::MaxDanceability,
                PlaylistParam::MaxEnergy,
            ]
        );
    }

    #[test]
    fn test_min_params_are_not_max() {
        assert!(!PlaylistParam::MinTempo.is_max());
        assert!(!PlaylistParam::ArtistMinLatitude.is_max());
        assert!(!PlaylistParam::Mood.is_max());
    }

    #[test]
    fn test_artist_type_code() {
        assert_eq!(i32::from(ArtistTypeEnum::ArtistType), 0);
        assert_eq!(
            ArtistTypeEnum::try_from(1).ok(),
            Some(ArtistTypeEnum::ArtistRadioType)
        );
    }
}
