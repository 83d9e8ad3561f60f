//! Clipboard adapters.
//!
//! Provides two [`ClipboardWriter`](crate::domain::ports::ClipboardWriter) implementations:
//! - [`ArboardClipboard`] - The system clipboard
//! - [`MemoryClipboard`] - In-process fallback for headless environments and tests

mod arboard_clipboard;
mod memory_clipboard;

pub use arboard_clipboard::ArboardClipboard;
pub use memory_clipboard::{HISTORY_LIMIT, MemoryClipboard};
