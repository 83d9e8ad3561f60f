use std::sync::Arc;

use crate::application::services::{ClipboardService, LinkBuilder};
use crate::domain::ports::{ClipboardWriter, LinkShortener};

/// Clipboard service over type-erased collaborators.
pub type SharedClipboardService = ClipboardService<dyn LinkShortener, dyn ClipboardWriter>;

/// Link services shared by everything the application root hands them to.
#[derive(Clone)]
pub struct AppState {
    pub clipboard: Arc<SharedClipboardService>,
}

impl AppState {
    pub fn new(
        links: LinkBuilder,
        shortener: Arc<dyn LinkShortener>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            clipboard: Arc::new(ClipboardService::new(links, shortener, clipboard)),
        }
    }

    pub fn links(&self) -> &LinkBuilder {
        self.clipboard.links()
    }
}
