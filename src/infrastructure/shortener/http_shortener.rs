//! Link shortener backed by the link host.
//!
//! Requesting a long link from the link host answers with a redirect whose
//! `Location` is the short form of that link. The redirect is not followed;
//! its target is the result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::LOCATION, redirect::Policy};
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::ports::{LinkShortener, ShortLink};

/// Resolves short links over HTTP.
///
/// Failures never propagate: any transport error, non-redirect status or
/// unusable `Location` is logged and reported as an unshortened link.
pub struct HttpLinkShortener {
    client: Client,
}

impl HttpLinkShortener {
    /// Creates a shortener whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised (e.g. no TLS
    /// backend is available).
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(timeout_secs = timeout.as_secs(), "HTTP link shortener ready");

        Ok(Self { client })
    }

    async fn request_short_url(&self, long_url: &Url) -> Result<Url, String> {
        let response = self
            .client
            .get(long_url.clone())
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        if !status.is_redirection() {
            return Err(format!("unexpected status {status}"));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .ok_or_else(|| "redirect without Location header".to_string())?
            .to_str()
            .map_err(|e| format!("unreadable Location header: {e}"))?;

        long_url
            .join(location)
            .map_err(|e| format!("invalid Location '{location}': {e}"))
    }
}

#[async_trait]
impl LinkShortener for HttpLinkShortener {
    async fn shorten(&self, long_url: Url) -> ShortLink {
        match self.request_short_url(&long_url).await {
            Ok(short_url) => {
                debug!(%long_url, %short_url, "short link ready");
                ShortLink::new(long_url, Some(short_url))
            }
            Err(reason) => {
                warn!(%long_url, %reason, "failed to get short link");
                ShortLink::unshortened(long_url)
            }
        }
    }
}
