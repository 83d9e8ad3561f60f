//! In-process clipboard.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::ports::{ClipboardError, ClipboardWriter};

/// Number of writes kept by [`MemoryClipboard`].
pub const HISTORY_LIMIT: usize = 16;

/// A clipboard that keeps the most recent writes in memory.
///
/// Only the last [`HISTORY_LIMIT`] texts are kept, older ones are dropped.
///
/// # Use Cases
///
/// - Headless environments without a system clipboard
/// - Tests observing what the link services copy
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    /// Creates an empty MemoryClipboard.
    pub fn new() -> Self {
        debug!("Using in-memory clipboard");
        Self::default()
    }

    /// Returns the current clipboard content.
    pub fn text(&self) -> Option<String> {
        self.history().last().cloned()
    }

    /// Returns the retained writes, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut history = self
            .history
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        history.push(text.to_string());
        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
        }
        Ok(())
    }
}
