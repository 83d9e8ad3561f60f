//! Link shortener port.

use async_trait::async_trait;
use url::Url;

/// Result of a shortening request.
///
/// `long_url` is always the URL the request was issued for, so a response can
/// be matched against the request that is currently pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub long_url: Url,
    /// `None` when the link could not be shortened.
    pub short_url: Option<Url>,
}

impl ShortLink {
    pub fn new(long_url: Url, short_url: Option<Url>) -> Self {
        Self {
            long_url,
            short_url,
        }
    }

    /// A response carrying no short form.
    pub fn unshortened(long_url: Url) -> Self {
        Self::new(long_url, None)
    }

    /// The short URL if present, otherwise the long one.
    pub fn best(&self) -> &Url {
        self.short_url.as_ref().unwrap_or(&self.long_url)
    }
}

/// Asynchronous link shortening service.
///
/// Implementations report failures as an unshortened [`ShortLink`] instead of
/// an error; callers fall back to the long URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::shortener::HttpLinkShortener`] - Resolves short links over HTTP
/// - [`crate::infrastructure::shortener::NullShortener`] - Never shortens
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkShortener: Send + Sync {
    /// Requests the short form of `long_url`.
    async fn shorten(&self, long_url: Url) -> ShortLink;
}
