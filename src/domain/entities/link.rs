//! Link entity representing a deep link against the link host.

use std::fmt;

use url::Url;

use crate::error::LinkError;
use crate::utils::encoding::{
    encode_path_segment, encode_query_component, escape_path_segment, escape_query_component,
};

/// A deep link made of a host, raw path segments and ordered query items.
///
/// Segments and query items are stored as given (not pre-encoded).
/// [`fmt::Display`] renders the readable form, where only delimiters are
/// escaped, [`Link::to_encoded`] renders the percent-encoded form that ends up
/// on the clipboard. Both forms parse back to the same segments and items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    host: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Link {
    /// Creates a link without query items, splitting `path` on `/`.
    ///
    /// `host` must not end with a slash, `path` must not start with one.
    pub fn new(host: impl Into<String>, path: impl AsRef<str>) -> Self {
        Self::from_segments(host, path.as_ref().split('/'))
    }

    /// Creates a link whose path is made of `segments`, each kept whole.
    ///
    /// A `/` inside a segment is escaped instead of starting a new segment.
    pub fn from_segments<I, S>(host: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            host: host.into(),
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// Appends a query item. Items keep their insertion order.
    pub fn add_query_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The raw path, segments joined with `/`.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn query_items(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the value of the first query item named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_query_item(&self, key: &str) -> bool {
        self.query_value(key).is_some()
    }

    /// Renders the percent-encoded form of the link.
    pub fn to_encoded(&self) -> String {
        self.render(encode_path_segment, encode_query_component)
    }

    /// Parses the encoded form into a [`Url`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidUrl`] if the host does not form a valid URL.
    pub fn to_url(&self) -> Result<Url, LinkError> {
        Url::parse(&self.to_encoded()).map_err(|e| LinkError::InvalidUrl(e.to_string()))
    }

    fn render(&self, segment: fn(&str) -> String, component: fn(&str) -> String) -> String {
        let path: Vec<String> = self.segments.iter().map(|s| segment(s)).collect();
        let mut out = format!("{}/{}", self.host, path.join("/"));

        for (i, (key, value)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(&component(key));
            out.push('=');
            out.push_str(&component(value));
        }

        out
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(escape_path_segment, escape_query_component))
    }
}
