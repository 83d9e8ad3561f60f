//! System clipboard backed by `arboard`.

use std::sync::Mutex;

use tracing::{debug, info};

use crate::domain::ports::{ClipboardError, ClipboardWriter};

/// Cross-platform system clipboard (Windows, macOS, X11 and Wayland).
///
/// `arboard` needs exclusive access for writes, so the handle is kept behind
/// a mutex.
pub struct ArboardClipboard {
    clipboard: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    /// Opens the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when no clipboard can be
    /// reached, e.g. on a headless system.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        info!("System clipboard opened");

        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(format!("clipboard lock poisoned: {e}")))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        debug!(len = text.len(), "System clipboard updated");
        Ok(())
    }
}
