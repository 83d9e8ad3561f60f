//! Application wiring.
//!
//! Picks the clipboard and shortener adapters for a [`Config`] and builds the
//! shared [`AppState`].

use std::sync::Arc;

use crate::application::services::LinkBuilder;
use crate::config::Config;
use crate::domain::ports::{ClipboardWriter, LinkShortener};
use crate::infrastructure::clipboard::{ArboardClipboard, MemoryClipboard};
use crate::infrastructure::shortener::{HttpLinkShortener, NullShortener};
use crate::state::AppState;

/// Builds the application state for `config`.
///
/// Initializes:
/// - Link builder for the configured host
/// - HTTP shortener (or NullShortener when disabled or unavailable)
/// - System clipboard (or MemoryClipboard when unavailable)
pub fn build_state(config: &Config) -> AppState {
    let links = LinkBuilder::new(&config.link_host);
    AppState::new(links, build_shortener(config), build_clipboard())
}

fn build_shortener(config: &Config) -> Arc<dyn LinkShortener> {
    if !config.shortener_enabled {
        tracing::info!("Link shortening disabled (NullShortener)");
        return Arc::new(NullShortener::new());
    }

    match HttpLinkShortener::new(config.shortener_timeout()) {
        Ok(shortener) => {
            tracing::info!("Link shortening enabled (HTTP)");
            Arc::new(shortener)
        }
        Err(e) => {
            tracing::warn!("Failed to create HTTP client: {}. Using NullShortener.", e);
            Arc::new(NullShortener::new())
        }
    }
}

fn build_clipboard() -> Arc<dyn ClipboardWriter> {
    match ArboardClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            tracing::warn!("{}. Using in-memory clipboard.", e);
            Arc::new(MemoryClipboard::new())
        }
    }
}
