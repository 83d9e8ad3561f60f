//! Collaborator trait definitions for the domain layer.
//!
//! The link services never talk to the windowing system or the network
//! directly. They go through these traits, which are implemented in
//! `crate::infrastructure`.
//!
//! # Available Ports
//!
//! - [`ClipboardWriter`] - Write-only access to a clipboard
//! - [`LinkShortener`] - Asynchronous long-to-short link resolution
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod clipboard;
pub mod shortener;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use shortener::{LinkShortener, ShortLink};

#[cfg(test)]
pub use clipboard::MockClipboardWriter;
#[cfg(test)]
pub use shortener::MockLinkShortener;
