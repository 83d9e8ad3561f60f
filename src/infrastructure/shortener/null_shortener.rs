//! No-op shortener for offline use or disabled shortening.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::domain::ports::{LinkShortener, ShortLink};

/// A shortener that never shortens.
///
/// Every request completes immediately without a short URL, so callers copy
/// the long link.
pub struct NullShortener;

impl NullShortener {
    /// Creates a new NullShortener instance.
    pub fn new() -> Self {
        debug!("Using NullShortener (link shortening disabled)");
        Self
    }
}

impl Default for NullShortener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkShortener for NullShortener {
    async fn shorten(&self, long_url: Url) -> ShortLink {
        ShortLink::unshortened(long_url)
    }
}
