//! Core domain entities representing the link data model.
//!
//! The source entities are plain, read-only data owned by the caller; they are
//! built fresh for every link and never retained by the link services.
//!
//! # Entity Types
//!
//! - [`Link`] - A deep link against the link host
//! - [`Track`] / [`Query`] - Track metadata behind open links
//! - [`Artist`] / [`Album`] - Targets of artist and album links
//! - [`DynamicPlaylist`] - A rule-based playlist with its [`Generator`] and [`Control`]s

pub mod artist;
pub mod dynamic_playlist;
pub mod link;
pub mod track;

pub use artist::{Album, Artist};
pub use dynamic_playlist::{Control, DynamicPlaylist, Generator, PlaylistMode};
pub use link::Link;
pub use track::{Query, Track};
