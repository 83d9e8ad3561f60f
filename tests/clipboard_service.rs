mod common;

use std::sync::Arc;

use common::GatedShortener;
use tomalink::infrastructure::shortener::NullShortener;
use tomalink::prelude::*;

const HOST: &str = "http://toma.hk";

#[tokio::test]
async fn test_superseded_response_does_not_touch_clipboard() {
    let shortener = Arc::new(GatedShortener::new());
    let (service, clipboard) = common::create_test_service(HOST, shortener.clone());

    let query_a = common::track_query("Debaser");
    let query_b = common::track_query("Hey");
    let url_a = common::long_url(&query_a);
    let url_b = common::long_url(&query_b);
    shortener.gate(&url_a);
    shortener.gate(&url_b);

    let first = service.copy_track_link_to_clipboard(&query_a).unwrap();
    let second = service.copy_track_link_to_clipboard(&query_b).unwrap();
    assert_eq!(
        service.pending_long_url().map(|u| u.to_string()),
        Some(url_b.clone())
    );

    shortener.release(&url_a, Some("http://toma.hk/p/aaaa"));
    let outcome = first.await.unwrap().unwrap();

    assert_eq!(outcome, CopyOutcome::Superseded);
    assert!(clipboard.text().is_none());

    shortener.release(&url_b, Some("http://toma.hk/p/bbbb"));
    let outcome = second.await.unwrap().unwrap();

    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: "http://toma.hk/p/bbbb".to_string(),
            shortened: true,
        }
    );
    assert_eq!(clipboard.history(), vec!["http://toma.hk/p/bbbb".to_string()]);
    assert!(service.pending_long_url().is_none());
}

#[tokio::test]
async fn test_late_response_after_completion_is_dropped() {
    let shortener = Arc::new(GatedShortener::new());
    let (service, clipboard) = common::create_test_service(HOST, shortener.clone());

    let query_a = common::track_query("Debaser");
    let query_b = common::track_query("Hey");
    let url_a = common::long_url(&query_a);
    let url_b = common::long_url(&query_b);
    shortener.gate(&url_a);
    shortener.gate(&url_b);

    let first = service.copy_track_link_to_clipboard(&query_a).unwrap();
    let second = service.copy_track_link_to_clipboard(&query_b).unwrap();

    // The newer request completes first, then the older one arrives.
    shortener.release(&url_b, None);
    let outcome = second.await.unwrap().unwrap();
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: url_b.clone(),
            shortened: false,
        }
    );

    shortener.release(&url_a, Some("http://toma.hk/p/aaaa"));
    assert_eq!(first.await.unwrap().unwrap(), CopyOutcome::Superseded);

    assert_eq!(clipboard.text(), Some(url_b));
}

#[tokio::test]
async fn test_track_link_falls_back_to_long_url() {
    let (service, clipboard) = common::create_test_service(HOST, Arc::new(NullShortener::new()));
    let query = common::track_query("Gouge Away");

    let outcome = service.copy_track_link_and_wait(&query).await.unwrap();

    let expected = "http://toma.hk/open/track/?artist=Pixies&title=Gouge%20Away&album=Doolittle";
    assert_eq!(
        outcome,
        CopyOutcome::Copied {
            text: expected.to_string(),
            shortened: false,
        }
    );
    assert_eq!(clipboard.text().as_deref(), Some(expected));
}

#[tokio::test]
async fn test_track_link_with_invalid_host() {
    let (service, clipboard) =
        common::create_test_service("no scheme here", Arc::new(NullShortener::new()));

    let result = service.copy_track_link_and_wait(&common::track_query("Hey")).await;

    assert!(matches!(result, Err(LinkError::InvalidUrl(_))));
    assert!(clipboard.text().is_none());
    assert!(service.pending_long_url().is_none());
}

#[test]
fn test_copy_artist_and_album_links() {
    let (service, clipboard) = common::create_test_service(HOST, Arc::new(NullShortener::new()));

    let artist = service
        .copy_simple_link_to_clipboard(&Artist::new("Frank Black"))
        .unwrap();
    assert_eq!(artist.to_string(), "http://toma.hk/artist/Frank Black");
    assert_eq!(
        clipboard.text().as_deref(),
        Some("http://toma.hk/artist/Frank%20Black")
    );

    let album = Album::new("Doolittle", None);
    service
        .copy_simple_link_to_clipboard(ShareTarget::Album(&album))
        .unwrap();
    assert_eq!(
        clipboard.text().as_deref(),
        Some("http://toma.hk/album//Doolittle")
    );
}

#[test]
fn test_copy_playlist_link() {
    let (service, clipboard) = common::create_test_service(HOST, Arc::new(NullShortener::new()));
    let playlist = DynamicPlaylist::new(
        "Rainy Day",
        PlaylistMode::Static,
        Generator::echonest(vec![Control::new("Mood", 35, "sad")]),
    );

    let link = service
        .copy_dynamic_playlist_link_to_clipboard(&playlist)
        .unwrap();

    assert_eq!(
        link,
        "http://toma.hk/autoplaylist/create/?type=echonest&title=Rainy Day&mood=sad"
    );
    assert_eq!(
        clipboard.text().as_deref(),
        Some("http://toma.hk/autoplaylist/create/?type=echonest&title=Rainy%20Day&mood=sad")
    );
}

#[test]
fn test_unsupported_playlist_is_not_copied() {
    let (service, clipboard) = common::create_test_service(HOST, Arc::new(NullShortener::new()));
    let playlist = DynamicPlaylist::new(
        "Mix",
        PlaylistMode::OnDemand,
        Generator::new("spotify", vec![]),
    );

    let link = service
        .copy_dynamic_playlist_link_to_clipboard(&playlist)
        .unwrap();

    assert!(link.is_empty());
    assert!(clipboard.history().is_empty());
}
