//! Artist and album entities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An album, optionally attributed to an artist.
///
/// Compilations and albums with unknown attribution carry no artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub artist: Option<Artist>,
}

impl Album {
    /// Creates a new Album instance.
    pub fn new(name: impl Into<String>, artist: Option<Artist>) -> Self {
        Self {
            name: name.into(),
            artist,
        }
    }

    /// Returns the artist name, or an empty string when the album has no artist.
    pub fn artist_name(&self) -> &str {
        self.artist.as_ref().map_or("", |a| a.name.as_str())
    }
}
