//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any link is
//! generated.
//!
//! ```bash
//! export LINK_HOST="http://toma.hk"
//! export SHORTENER_ENABLED="true"
//! export SHORTENER_TIMEOUT_SECONDS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `LINK_HOST` - Host every link is generated against (default: `http://toma.hk`)
//! - `SHORTENER_ENABLED` - Shorten track links before copying (default: `true`)
//! - `SHORTENER_TIMEOUT_SECONDS` - Short link request timeout (default: 10, range: 1-120)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::DEFAULT_LINK_HOST;
use crate::utils::host_normalizer::normalize_host;

/// Link helper configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized link host, without trailing slash.
    pub link_host: String,
    /// When false, track links are copied in their long form.
    pub shortener_enabled: bool,
    pub shortener_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINK_HOST` is not a valid http(s) host.
    pub fn from_env() -> Result<Self> {
        let link_host = Self::load_link_host().context("Failed to load link host")?;

        let shortener_enabled = env::var("SHORTENER_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let shortener_timeout_seconds = env::var("SHORTENER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            link_host,
            shortener_enabled,
            shortener_timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Loads and normalizes `LINK_HOST`, falling back to the default host.
    fn load_link_host() -> Result<String> {
        let raw = env::var("LINK_HOST").unwrap_or_else(|_| DEFAULT_LINK_HOST.to_string());

        normalize_host(&raw).with_context(|| format!("LINK_HOST is invalid: '{raw}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `shortener_timeout_seconds` is outside 1..=120
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.shortener_timeout_seconds == 0 || self.shortener_timeout_seconds > 120 {
            anyhow::bail!(
                "SHORTENER_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.shortener_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.link_host.ends_with('/') {
            anyhow::bail!(
                "LINK_HOST must not end with '/', got '{}'",
                self.link_host
            );
        }

        Ok(())
    }

    pub fn shortener_timeout(&self) -> Duration {
        Duration::from_secs(self.shortener_timeout_seconds)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Link host: {}", self.link_host);

        if self.shortener_enabled {
            tracing::info!(
                "  Shortener: enabled (timeout {}s)",
                self.shortener_timeout_seconds
            );
        } else {
            tracing::info!("  Shortener: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
