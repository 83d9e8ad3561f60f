//! Link shortener adapters.
//!
//! Provides two [`LinkShortener`](crate::domain::ports::LinkShortener) implementations:
//! - [`HttpLinkShortener`] - Asks the link host for the short form
//! - [`NullShortener`] - No-op implementation for disabled shortening

mod http_shortener;
mod null_shortener;

pub use http_shortener::HttpLinkShortener;
pub use null_shortener::NullShortener;
