//! # tomalink
//!
//! Deep-link builder and clipboard helper for a desktop music player.
//!
//! Builds links that open a track, an artist or an album, or recreate a
//! dynamic (station) playlist, against a fixed link host. Track links are
//! shortened before they are copied to the clipboard.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entities, Echo Nest codes and collaborator ports
//! - **Application Layer** ([`application`]) - Link building and copy workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - Clipboard and link shortener adapters
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tomalink::prelude::*;
//! use tomalink::infrastructure::{clipboard::MemoryClipboard, shortener::NullShortener};
//!
//! let state = AppState::new(
//!     LinkBuilder::default(),
//!     Arc::new(NullShortener::new()),
//!     Arc::new(MemoryClipboard::new()),
//! );
//!
//! let link = state.links().build_artist_link(&Artist::new("Pixies"));
//! assert_eq!(link.to_string(), "http://toma.hk/artist/Pixies");
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use application::services::CopyOutcome;
pub use error::LinkError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClipboardService, CopyOutcome, LinkBuilder, ShareTarget,
    };
    pub use crate::domain::entities::{
        Album, Artist, Control, DynamicPlaylist, Generator, Link, PlaylistMode, Query, Track,
    };
    pub use crate::domain::ports::{ClipboardWriter, LinkShortener, ShortLink};
    pub use crate::error::LinkError;
    pub use crate::state::AppState;
}
