//! Dynamic playlist entities: playlists, generators and their controls.

use serde::{Deserialize, Serialize};

use crate::domain::echonest::{ArtistTypeEnum, ECHONEST_GENERATOR, PlaylistParam};

/// How a dynamic playlist produces its tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistMode {
    /// Tracks are generated as the station plays.
    OnDemand,
    /// A fixed batch of tracks is generated up front.
    #[default]
    Static,
}

/// One rule of a generator, e.g. "limit to artist X" or "max tempo Y".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Label of the selected control type, e.g. `Artist` or `Tempo`.
    pub selected_type: String,
    /// Backend-specific match code.
    #[serde(default)]
    pub match_code: i32,
    #[serde(default)]
    pub input: String,
}

impl Control {
    pub fn new(selected_type: impl Into<String>, match_code: i32, input: impl Into<String>) -> Self {
        Self {
            selected_type: selected_type.into(),
            match_code,
            input: input.into(),
        }
    }

    /// True when an `Artist` control limits the playlist to that artist.
    pub fn is_artist_limit(&self) -> bool {
        self.match_code == i32::from(ArtistTypeEnum::ArtistType)
    }

    /// Decoded [`PlaylistParam`] of the match code, if it is a known one.
    pub fn param(&self) -> Option<PlaylistParam> {
        PlaylistParam::from_code(self.match_code)
    }
}

/// The algorithm behind a dynamic playlist and its ordered controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// Generator type tag, e.g. `echonest`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Generator {
    pub fn new(kind: impl Into<String>, controls: Vec<Control>) -> Self {
        Self {
            kind: kind.into(),
            controls,
        }
    }

    /// Creates an Echo Nest generator.
    pub fn echonest(controls: Vec<Control>) -> Self {
        Self::new(ECHONEST_GENERATOR, controls)
    }

    pub fn is_echonest(&self) -> bool {
        self.kind == ECHONEST_GENERATOR
    }
}

/// A playlist whose tracks are generated from rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicPlaylist {
    pub title: String,
    #[serde(default)]
    pub mode: PlaylistMode,
    pub generator: Generator,
}

impl DynamicPlaylist {
    pub fn new(title: impl Into<String>, mode: PlaylistMode, generator: Generator) -> Self {
        Self {
            title: title.into(),
            mode,
            generator,
        }
    }
}
