//! Copy-to-clipboard workflows for generated links.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

use crate::application::services::LinkBuilder;
use crate::domain::entities::{Album, Artist, DynamicPlaylist, Link, Query};
use crate::domain::ports::{ClipboardWriter, LinkShortener, ShortLink};
use crate::error::LinkError;

/// Something that can be copied as a plain link without shortening.
#[derive(Debug, Clone, Copy)]
pub enum ShareTarget<'a> {
    Artist(&'a Artist),
    Album(&'a Album),
}

impl<'a> From<&'a Artist> for ShareTarget<'a> {
    fn from(artist: &'a Artist) -> Self {
        Self::Artist(artist)
    }
}

impl<'a> From<&'a Album> for ShareTarget<'a> {
    fn from(album: &'a Album) -> Self {
        Self::Album(album)
    }
}

/// Result of a shorten-then-copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// `text` was written to the clipboard.
    Copied { text: String, shortened: bool },
    /// A newer copy request replaced this one before it completed.
    Superseded,
}

/// The copy request whose shortening response is awaited.
#[derive(Debug, Clone)]
struct PendingCopy {
    generation: u64,
    long_url: Url,
}

/// Single-slot tracker of the in-flight track link copy.
///
/// Every request gets a new generation number. Only a response carrying the
/// generation and long URL stored in the slot may complete the copy.
#[derive(Debug, Default)]
struct PendingSlot {
    next_generation: AtomicU64,
    current: Mutex<Option<PendingCopy>>,
}

impl PendingSlot {
    fn lock(&self) -> MutexGuard<'_, Option<PendingCopy>> {
        // The slot only holds plain data, a poisoned lock is still consistent.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores `long_url` as the pending copy and returns its generation.
    fn begin(&self, long_url: Url) -> u64 {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        *self.lock() = Some(PendingCopy {
            generation,
            long_url,
        });
        generation
    }

    fn long_url(&self) -> Option<Url> {
        self.lock().as_ref().map(|p| p.long_url.clone())
    }
}

/// Copies generated links to the clipboard.
///
/// Artist, album and playlist links are copied immediately. Track links are
/// shortened first: the long URL becomes the pending copy and the shortening
/// request runs in the background. If another track link is copied before the
/// response arrives, the older response is discarded (last call wins).
pub struct ClipboardService<S: LinkShortener + ?Sized, C: ClipboardWriter + ?Sized> {
    links: LinkBuilder,
    shortener: Arc<S>,
    clipboard: Arc<C>,
    pending: Arc<PendingSlot>,
}

impl<S, C> ClipboardService<S, C>
where
    S: LinkShortener + ?Sized + 'static,
    C: ClipboardWriter + ?Sized + 'static,
{
    /// Creates a new clipboard service.
    pub fn new(links: LinkBuilder, shortener: Arc<S>, clipboard: Arc<C>) -> Self {
        Self {
            links,
            shortener,
            clipboard,
            pending: Arc::new(PendingSlot::default()),
        }
    }

    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    /// Long URL of the track link copy still waiting for its short form.
    pub fn pending_long_url(&self) -> Option<Url> {
        self.pending.long_url()
    }

    /// Builds an artist or album link, copies its encoded form and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Clipboard`] if the clipboard write fails.
    pub fn copy_simple_link_to_clipboard<'a>(
        &self,
        target: impl Into<ShareTarget<'a>>,
    ) -> Result<Link, LinkError> {
        let link = match target.into() {
            ShareTarget::Artist(artist) => self.links.build_artist_link(artist),
            ShareTarget::Album(album) => self.links.build_album_link(album),
        };

        self.clipboard.set_text(&link.to_encoded())?;
        tracing::debug!(link = %link, "copied link to clipboard");

        Ok(link)
    }

    /// Copies the link recreating `playlist` and returns its string form.
    ///
    /// When the playlist cannot be expressed as a link the returned string is
    /// empty and the clipboard is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Clipboard`] if the clipboard write fails.
    pub fn copy_dynamic_playlist_link_to_clipboard(
        &self,
        playlist: &DynamicPlaylist,
    ) -> Result<String, LinkError> {
        let link = match self.links.try_build_dynamic_playlist_link(playlist) {
            Ok(link) => link,
            Err(e @ LinkError::UnsupportedGenerator { .. }) => {
                tracing::warn!(playlist = %playlist.title, error = %e, "playlist link not copied");
                return Ok(String::new());
            }
            Err(e) => return Err(e),
        };

        self.clipboard.set_text(&link.to_encoded())?;
        tracing::debug!(link = %link, "copied playlist link to clipboard");

        Ok(link.to_string())
    }

    /// Copies the open link of `query`, preferring its short form.
    ///
    /// Returns as soon as the shortening request is issued. The returned
    /// handle resolves once the response has been handled; awaiting it is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidUrl`] if the link host does not form a
    /// valid URL, or [`LinkError::TaskFailed`] when called outside a tokio
    /// runtime. In both cases the pending copy is left untouched. The handle
    /// resolves to [`LinkError::Clipboard`] if the write fails.
    pub fn copy_track_link_to_clipboard(
        &self,
        query: &Query,
    ) -> Result<JoinHandle<Result<CopyOutcome, LinkError>>, LinkError> {
        let long_url = self.links.build_track_open_link_from_query(query).to_url()?;
        let runtime = Handle::try_current().map_err(|e| LinkError::TaskFailed(e.to_string()))?;

        let generation = self.pending.begin(long_url.clone());
        tracing::debug!(generation, %long_url, "requesting short link");

        let shortener = Arc::clone(&self.shortener);
        let clipboard = Arc::clone(&self.clipboard);
        let pending = Arc::clone(&self.pending);

        Ok(runtime.spawn(async move {
            let ready = shortener.shorten(long_url).await;
            complete_copy(&pending, clipboard.as_ref(), generation, ready)
        }))
    }

    /// Copies the open link of `query` and waits for the outcome.
    ///
    /// # Errors
    ///
    /// See [`Self::copy_track_link_to_clipboard`]. Returns
    /// [`LinkError::TaskFailed`] if the background task panicked.
    pub async fn copy_track_link_and_wait(&self, query: &Query) -> Result<CopyOutcome, LinkError> {
        self.copy_track_link_to_clipboard(query)?
            .await
            .map_err(|e| LinkError::TaskFailed(e.to_string()))?
    }
}

/// Handles a shortening response for the copy started as `generation`.
fn complete_copy<C: ClipboardWriter + ?Sized>(
    pending: &PendingSlot,
    clipboard: &C,
    generation: u64,
    ready: ShortLink,
) -> Result<CopyOutcome, LinkError> {
    let mut current = pending.lock();

    let is_current = current
        .as_ref()
        .is_some_and(|p| p.generation == generation && p.long_url == ready.long_url);
    if !is_current {
        return Ok(CopyOutcome::Superseded);
    }

    *current = None;
    drop(current);

    let text = ready.best().to_string();
    clipboard.set_text(&text)?;
    tracing::debug!(generation, %text, "copied track link to clipboard");

    Ok(CopyOutcome::Copied {
        text,
        shortened: ready.short_url.is_some(),
    })
}
