//! Deep link construction.

use crate::domain::echonest::ECHONEST_GENERATOR;
use crate::domain::entities::{Album, Artist, Control, DynamicPlaylist, Link, PlaylistMode, Query};
use crate::error::LinkError;

/// Host every link is generated against unless configured otherwise.
pub const DEFAULT_LINK_HOST: &str = "http://toma.hk";

/// Builds deep links for tracks, artists, albums and dynamic playlists.
///
/// Holds no state besides the link host, so a single instance can be shared
/// freely between callers.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    host: String,
}

impl LinkBuilder {
    /// Creates a builder for `host`.
    ///
    /// The host is expected in normalized form, see
    /// [`crate::utils::host_normalizer::normalize_host`].
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn hostname(&self) -> &str {
        &self.host
    }

    /// Builds the link that opens a track.
    ///
    /// Query items are added in the order `artist`, `title`, `album`, and only
    /// for non-empty values.
    pub fn build_track_open_link(&self, title: &str, artist: &str, album: &str) -> Link {
        let mut link = Link::new(&self.host, "open/track/");

        for (key, value) in [("artist", artist), ("title", title), ("album", album)] {
            if !value.is_empty() {
                link.add_query_item(key, value);
            }
        }

        link
    }

    /// Builds the open link for the track behind `query`.
    pub fn build_track_open_link_from_query(&self, query: &Query) -> Link {
        let track = query.track();
        self.build_track_open_link(&track.title, &track.artist, &track.album)
    }

    /// Builds the artist link. The name is kept as a single path segment.
    pub fn build_artist_link(&self, artist: &Artist) -> Link {
        Link::from_segments(&self.host, ["artist", artist.name.as_str()])
    }

    /// Builds the album link.
    ///
    /// Album and artist names are taken verbatim; characters that need
    /// escaping are only escaped when the link is encoded. An album without an
    /// artist keeps an empty artist segment.
    pub fn build_album_link(&self, album: &Album) -> Link {
        Link::new(
            &self.host,
            format!("album/{}/{}", album.artist_name(), album.name),
        )
    }

    /// Builds the link that recreates a dynamic playlist.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnsupportedGenerator`] unless the playlist uses the
    /// Echo Nest generator.
    pub fn try_build_dynamic_playlist_link(
        &self,
        playlist: &DynamicPlaylist,
    ) -> Result<Link, LinkError> {
        let generator = &playlist.generator;
        if !generator.is_echonest() {
            return Err(LinkError::unsupported_generator(&generator.kind));
        }

        let kind = match playlist.mode {
            PlaylistMode::OnDemand => "station",
            PlaylistMode::Static => "autoplaylist",
        };

        let mut link = Link::new(&self.host, format!("{kind}/create/"));
        link.add_query_item("type", ECHONEST_GENERATOR);
        link.add_query_item("title", &playlist.title);

        for control in &generator.controls {
            let (name, value) = control_query_item(control);
            link.add_query_item(name, value);
        }

        Ok(link)
    }

    /// Builds the dynamic playlist link as a string.
    ///
    /// Returns an empty string (and logs a warning) when the generator is not
    /// supported.
    pub fn build_dynamic_playlist_link(&self, playlist: &DynamicPlaylist) -> String {
        match self.try_build_dynamic_playlist_link(playlist) {
            Ok(link) => link.to_string(),
            Err(e) => {
                tracing::warn!(playlist = %playlist.title, error = %e, "cannot build playlist link");
                String::new()
            }
        }
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_HOST)
    }
}

/// Maps a generator control to its query item.
fn control_query_item(control: &Control) -> (String, &str) {
    let name = match control.selected_type.as_str() {
        "Artist" if control.is_artist_limit() => "artist_limitto".to_string(),
        "Artist" => "artist".to_string(),
        "Artist Description" => "description".to_string(),
        other => {
            let mut name = other.to_lowercase().replace(' ', "_");
            if control.param().is_some_and(|p| p.is_max()) {
                name.push_str("_max");
            }
            name
        }
    };

    (name, control.input.as_str())
}
