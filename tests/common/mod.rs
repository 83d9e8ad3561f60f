#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use tokio::sync::oneshot;
use tomalink::application::services::{ClipboardService, LinkBuilder};
use tomalink::domain::entities::{Query, Track};
use tomalink::domain::ports::{LinkShortener, ShortLink};
use tomalink::infrastructure::clipboard::MemoryClipboard;
use url::Url;

pub fn track_query(title: &str) -> Query {
    Query::new(Track::new(title, "Pixies", "Doolittle"))
}

/// Long URL the default builder generates for `query`.
pub fn long_url(query: &Query) -> String {
    LinkBuilder::default()
        .build_track_open_link_from_query(query)
        .to_url()
        .unwrap()
        .to_string()
}

struct Gate {
    tx: Option<oneshot::Sender<Option<Url>>>,
    rx: Option<oneshot::Receiver<Option<Url>>>,
}

/// Shortener whose responses are released by the test, one URL at a time.
///
/// URLs without a gate are answered immediately without a short form.
#[derive(Default)]
pub struct GatedShortener {
    gates: Mutex<HashMap<String, Gate>>,
}

impl GatedShortener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds back the response for `long_url` until [`Self::release`] is called.
    pub fn gate(&self, long_url: &str) {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(
            long_url.to_string(),
            Gate {
                tx: Some(tx),
                rx: Some(rx),
            },
        );
    }

    /// Lets the response for `long_url` through with the given short URL.
    pub fn release(&self, long_url: &str, short_url: Option<&str>) {
        let tx = self
            .gates
            .lock()
            .unwrap()
            .get_mut(long_url)
            .and_then(|g| g.tx.take())
            .expect("gate not registered or already released");

        let short_url = short_url.map(|s| Url::parse(s).unwrap());
        let _ = tx.send(short_url);
    }
}

#[async_trait]
impl LinkShortener for GatedShortener {
    async fn shorten(&self, long_url: Url) -> ShortLink {
        let rx = {
            let mut gates = self.gates.lock().unwrap();
            gates.get_mut(long_url.as_str()).and_then(|g| g.rx.take())
        };

        let short_url = match rx {
            Some(rx) => rx.await.ok().flatten(),
            None => None,
        };

        ShortLink::new(long_url, short_url)
    }
}

pub fn create_test_service<S: LinkShortener + 'static>(
    host: &str,
    shortener: Arc<S>,
) -> (ClipboardService<S, MemoryClipboard>, Arc<MemoryClipboard>) {
    let clipboard = Arc::new(MemoryClipboard::new());
    let service = ClipboardService::new(LinkBuilder::new(host), shortener, clipboard.clone());
    (service, clipboard)
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_link_host(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
