//! End-to-end tests for the items view against a mocked API server.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use client::{ApiService, FetchError, ItemSource, ItemsView, ViewState};
use common::Item;
use httpmock::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts ERROR-level events emitted while installed.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn test_success_renders_entries_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/items");
            then.status(200).json_body(serde_json::json!(["A", "B"]));
        })
        .await;

    let mut view = ItemsView::new(ApiService::new(server.base_url()));
    view.mount().await;

    assert_eq!(
        view.state(),
        &ViewState::Populated(vec![Item::from("A"), Item::from("B")])
    );
    let html = view.render();
    assert_eq!(html.matches("<li").count(), 2);
    let a = html.find(">A</li>").unwrap();
    let b = html.find(">B</li>").unwrap();
    assert!(a < b);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_server_error_leaves_list_empty_and_logs_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/items");
            then.status(500);
        })
        .await;

    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut view = ItemsView::new(ApiService::new(server.base_url()));
    view.mount().await;
    view.mount().await;

    assert_eq!(view.state(), &ViewState::Failed);
    assert!(view.items().is_empty());
    assert!(!view.render().contains("<li"));
    assert_eq!(counter.count(), 1);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_fetch_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/items");
            then.status(503);
        })
        .await;

    let err = ApiService::new(server.base_url())
        .fetch_items()
        .await
        .unwrap_err();

    match err {
        FetchError::Status(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_non_list_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/items");
            then.status(200).json_body(serde_json::json!({ "items": [] }));
        })
        .await;

    let err = ApiService::new(server.base_url())
        .fetch_items()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let err = ApiService::new("http://127.0.0.1:1")
        .fetch_items()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
