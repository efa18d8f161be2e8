//! Test utilities for API server integration tests

use std::sync::Arc;

use axum_test::TestServer;
use aurix::core::http::{create_router, AppState};
use aurix::db::{InMemoryTradeStore, TradeStore};
use aurix::metrics::Metrics;
use aurix::signals::engine::OscillatorFn;
use serde_json::Value;
use wiremock::MockServer;

use crate::test_utils::{context_with, feed_provider, mock_quote_feed};

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub feed: MockServer,
}

impl TestApiServer {
    /// Server over an in-memory store and a feed answering `body`.
    pub async fn new(body: Value, oscillator: OscillatorFn) -> Self {
        Self::with_store(body, oscillator, Arc::new(InMemoryTradeStore::new())).await
    }

    pub async fn with_store(
        body: Value,
        oscillator: OscillatorFn,
        store: Arc<dyn TradeStore>,
    ) -> Self {
        let feed = MockServer::start().await;
        mock_quote_feed(&feed, body).await;

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let context = context_with(feed_provider(&feed), store, oscillator, Some(metrics.clone()));
        let state = AppState::new(context, metrics.clone());

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            feed,
        }
    }
}
