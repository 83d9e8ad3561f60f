//! Link services for the application layer.

pub mod clipboard_service;
pub mod link_builder;

pub use clipboard_service::{ClipboardService, CopyOutcome, ShareTarget};
pub use link_builder::{DEFAULT_LINK_HOST, LinkBuilder};
