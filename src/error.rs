//! Error types shared by the link services.

use crate::domain::ports::ClipboardError;

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The playlist generator cannot be expressed as a link.
    #[error("Only echonest generators are supported, got '{kind}'")]
    UnsupportedGenerator { kind: String },

    #[error("Invalid link URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// The background copy task panicked or was aborted.
    #[error("Copy task failed: {0}")]
    TaskFailed(String),
}

impl LinkError {
    pub fn unsupported_generator(kind: impl Into<String>) -> Self {
        Self::UnsupportedGenerator { kind: kind.into() }
    }
}
