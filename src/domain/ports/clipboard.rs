//! Clipboard port and error types.

/// Errors that can occur while writing to a clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write-only clipboard access.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::ArboardClipboard`] - System clipboard
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - In-process clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    /// Replaces the clipboard content with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::WriteFailed`] if the backend rejects the write.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}
