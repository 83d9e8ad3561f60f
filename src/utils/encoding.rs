//! Percent-encoding sets used when a link is rendered.
//!
//! Links have two renderings. The encoded form escapes everything outside the
//! unreserved set and is what ends up on the clipboard. The readable form only
//! escapes the delimiters that would otherwise change how the link parses, so
//! spaces and punctuation stay legible.

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Delimiters that would split or end a path segment.
const READABLE_SEGMENT: &AsciiSet = &CONTROLS.add(b'/').add(b'?').add(b'#').add(b'%');

/// Delimiters that would split a query item or be decoded as a space.
const READABLE_QUERY: &AsciiSet = &CONTROLS
    .add(b'&')
    .add(b'=')
    .add(b'#')
    .add(b'+')
    .add(b'%');

/// Percent-encodes a single path segment, `/` included.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Percent-encodes a query key or value.
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Escapes the delimiters of a path segment, leaving the rest readable.
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, READABLE_SEGMENT).to_string()
}

/// Escapes the delimiters of a query key or value, leaving the rest readable.
pub fn escape_query_component(value: &str) -> String {
    utf8_percent_encode(value, READABLE_QUERY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment_escapes_slash() {
        assert_eq!(encode_path_segment("AC/DC"), "AC%2FDC");
        assert_eq!(encode_path_segment("Sigur Rós"), "Sigur%20R%C3%B3s");
        assert_eq!(encode_path_segment("?#1"), "%3F%231");
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("120"), "120");
        assert_eq!(encode_query_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_query_component("x/y"), "x%2Fy");
        assert_eq!(encode_query_component("keep-._~"), "keep-._~");
    }

    #[test]
    fn test_escape_path_segment() {
        assert_eq!(escape_path_segment("Guns N' Roses"), "Guns N' Roses");
        assert_eq!(escape_path_segment("AC/DC"), "AC%2FDC");
        assert_eq!(escape_path_segment("Why?#2"), "Why%3F%232");
    }

    #[test]
    fn test_escape_query_component() {
        assert_eq!(escape_query_component("Late Night"), "Late Night");
        assert_eq!(
            escape_query_component("Rock & Roll #1"),
            "Rock %26 Roll %231"
        );
        assert_eq!(escape_query_component("a=b+c 100%"), "a%3Db%2Bc 100%25");
        assert_eq!(escape_query_component("Where?"), "Where?");
    }
}
