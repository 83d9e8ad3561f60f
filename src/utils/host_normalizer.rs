//! Link host normalization.
//!
//! Ensures the configured link host has a canonical form so that generated
//! links never contain a doubled slash after the host, an uppercase host name
//! or a default port.

use url::Url;

/// Errors that can occur during host normalization.
#[derive(Debug, thiserror::Error)]
pub enum HostNormalizationError {
    #[error("Invalid host URL: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Link host must not carry a query or fragment")]
    UnexpectedComponents,

    #[error("Failed to normalize host: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a link host to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Query / fragment**: Rejected
/// 5. **Trailing slash**: Removed, a path prefix is otherwise preserved
///
/// # Errors
///
/// Returns [`HostNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`HostNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`HostNormalizationError::UnexpectedComponents`] if a query or fragment is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_host("HTTP://Toma.HK/").unwrap(), "http://toma.hk");
/// assert_eq!(normalize_host("https://toma.hk:443").unwrap(), "https://toma.hk");
/// ```
pub fn normalize_host(input: &str) -> Result<String, HostNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| HostNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(HostNormalizationError::UnsupportedProtocol),
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(HostNormalizationError::UnexpectedComponents);
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            HostNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            HostNormalizationError::NormalizationFailed(
                "Failed to remove default port".to_string(),
            )
        })?;
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
