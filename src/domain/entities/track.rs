//! Track and query entities.

use serde::{Deserialize, Serialize};

/// Track metadata used to build open links.
///
/// Any field may be empty; empty fields are left out of generated links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
}

impl Track {
    /// Creates a new Track instance.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }
}

/// A resolvable query wrapping the track it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    track: Track,
}

impl Query {
    pub fn new(track: Track) -> Self {
        Self { track }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }
}

impl From<Track> for Query {
    fn from(track: Track) -> Self {
        Self::new(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_creation() {
        let track = Track::new("Debaser", "Pixies", "Doolittle");

        assert_eq!(track.title, "Debaser");
        assert_eq!(track.artist, "Pixies");
        assert_eq!(track.album, "Doolittle");
    }

    #[test]
    fn test_query_exposes_track() {
        let query = Query::from(Track::new("Hey", "Pixies", ""));

        assert_eq!(query.track().title, "Hey");
        assert!(query.track().album.is_empty());
    }

    #[test]
    fn test_track_deserialize_missing_fields() {
        let track: Track = serde_json::from_str(r#"{"title":"Wave of Mutilation"}"#).unwrap();

        assert_eq!(track.title, "Wave of Mutilation");
        assert!(track.artist.is_empty());
        assert!(track.album.is_empty());
    }
}
