//! Utility functions for link encoding and host handling.
//!
//! - [`encoding`] - Percent-encoding of link paths and query items
//! - [`host_normalizer`] - Link host normalization

pub mod encoding;
pub mod host_normalizer;
