//! Integration tests for trade cycles
//!
//! Tests the fetch → compute → decide → record → log pipeline, the
//! single-flight guard and the scheduler.

use std::sync::Arc;
use std::time::Duration;

use aurix::config::PriceWindowConfig;
use aurix::core::scheduler::JobScheduler;
use aurix::db::{InMemoryTradeStore, TradeStore};
use aurix::error::CycleError;
use aurix::jobs::{handle_manual_trade, handle_scheduled_tick, JobContext, TickResult};
use aurix::logging::LogSink;
use aurix::metrics::Metrics;
use aurix::models::TradeSignal;

use crate::test_utils::{
    context_with, feed_provider, mock_quote_feed, neutral, no_reading, overbought, oversold,
    quote_body, quote_body_without_prime, CycleFixture, FailingTradeStore, SlowFeed,
};

#[tokio::test]
async fn oversold_cycle_records_buy() {
    let fixture = CycleFixture::new(quote_body(1900.0), oversold).await;

    let outcome = match handle_scheduled_tick(&fixture.context).await {
        TickResult::Completed(outcome) => outcome,
        other => panic!("expected completed cycle, got {:?}", other),
    };

    assert_eq!(outcome.decision.signal, TradeSignal::Buy);
    assert_eq!(outcome.decision.stop_loss, Some(1890.0));
    assert_eq!(outcome.decision.take_profit, Some(1920.0));
    assert_eq!(outcome.current_price, 1900.0);
    assert_eq!(outcome.rsi, 25.0);

    let trades = fixture.store.recent_trades(10).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(Some(&trades[0]), outcome.record.as_ref());
    assert_eq!(trades[0].stop_loss, 1890.0);
    assert_eq!(trades[0].take_profit, 1920.0);

    let logs = fixture.context.log_sink.recent().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "Executed trade: Buy at 1900, RSI: 25");
}

#[tokio::test]
async fn overbought_cycle_records_sell() {
    let fixture = CycleFixture::new(quote_body(1900.0), overbought).await;

    let outcome = handle_manual_trade(&fixture.context).await.unwrap();
    assert_eq!(outcome.decision.signal, TradeSignal::Sell);
    assert_eq!(outcome.decision.levels(), Some((1910.0, 1880.0)));
    assert_eq!(fixture.store.len().await, 1);
}

#[tokio::test]
async fn neutral_cycle_holds_and_logs() {
    let fixture = CycleFixture::new(quote_body(1900.0), neutral).await;

    let outcome = handle_manual_trade(&fixture.context).await.unwrap();
    assert_eq!(outcome.decision.signal, TradeSignal::Hold);
    assert!(outcome.record.is_none());
    assert!(fixture.store.is_empty().await);

    let logs = fixture.context.log_sink.recent().await;
    assert_eq!(
        logs[0].message,
        "No trade executed, RSI is within neutral range: 50"
    );
}

#[tokio::test]
async fn missing_prime_profile_fails_without_trade() {
    let fixture = CycleFixture::new(quote_body_without_prime(), oversold).await;

    let result = handle_scheduled_tick(&fixture.context).await;
    assert!(matches!(result, TickResult::Failed(CycleError::Fetch(_))));
    assert!(fixture.store.is_empty().await);

    let logs = fixture.context.log_sink.snapshot().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(
        logs[0].message,
        "Error executing trade: Failed to fetch gold price data"
    );
}

#[tokio::test]
async fn missing_oscillator_reading_is_a_compute_error() {
    let fixture = CycleFixture::new(quote_body(1900.0), no_reading).await;

    let err = handle_manual_trade(&fixture.context).await.unwrap_err();
    match err {
        CycleError::Compute(aurix::error::ComputeError::InsufficientData { current_price }) => {
            assert_eq!(current_price, 1900.0)
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(fixture.store.is_empty().await);
    assert_eq!(
        fixture.context.log_sink.recent().await[0].message,
        "RSI calculation returned null"
    );
}

#[tokio::test]
async fn flat_window_with_real_rsi_has_no_reading() {
    let feed = wiremock::MockServer::start().await;
    mock_quote_feed(&feed, quote_body(1900.0)).await;
    let store = Arc::new(InMemoryTradeStore::new());
    let context = JobContext::new(feed_provider(&feed), store.clone(), LogSink::default(), None)
        .with_window(PriceWindowConfig {
            points: 15,
            jitter: 0.0,
        });

    let err = handle_manual_trade(&context).await.unwrap_err();
    assert!(matches!(err, CycleError::Compute(_)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn real_rsi_cycle_completes() {
    let feed = wiremock::MockServer::start().await;
    mock_quote_feed(&feed, quote_body(1900.0)).await;
    let context = JobContext::new(
        feed_provider(&feed),
        Arc::new(InMemoryTradeStore::new()),
        LogSink::default(),
        None,
    );

    let outcome = handle_manual_trade(&context).await.unwrap();
    assert!((0.0..=100.0).contains(&outcome.rsi));
    assert_eq!(outcome.record.is_some(), outcome.decision.is_actionable());
    assert_eq!(context.log_sink.len().await, 1);
}

#[tokio::test]
async fn persistence_failure_is_logged() {
    let feed = wiremock::MockServer::start().await;
    mock_quote_feed(&feed, quote_body(1900.0)).await;
    let context = context_with(
        feed_provider(&feed),
        Arc::new(FailingTradeStore),
        oversold,
        None,
    );

    let err = handle_manual_trade(&context).await.unwrap_err();
    assert!(matches!(err, CycleError::Persistence(_)));
    let logs = context.log_sink.recent().await;
    assert!(logs[0].message.starts_with("Error executing trade: failed to store trade"));
}

#[tokio::test]
async fn scheduled_tick_is_skipped_while_cycle_runs() {
    let store = Arc::new(InMemoryTradeStore::new());
    let context = context_with(
        Arc::new(SlowFeed {
            price: 1900.0,
            delay: Duration::from_millis(300),
        }),
        store.clone(),
        oversold,
        None,
    );

    let running = {
        let context = context.clone();
        tokio::spawn(async move { handle_manual_trade(&context).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(context.is_cycle_running());

    let tick = handle_scheduled_tick(&context).await;
    assert!(matches!(tick, TickResult::Skipped));

    running.await.unwrap().unwrap();
    assert!(!context.is_cycle_running());
    assert_eq!(store.len().await, 1);
    assert_eq!(context.log_sink.len().await, 1);
}

#[tokio::test]
async fn manual_trades_wait_for_each_other() {
    let store = Arc::new(InMemoryTradeStore::new());
    let context = context_with(
        Arc::new(SlowFeed {
            price: 1900.0,
            delay: Duration::from_millis(100),
        }),
        store.clone(),
        oversold,
        None,
    );

    let first = {
        let context = context.clone();
        tokio::spawn(async move { handle_manual_trade(&context).await })
    };
    let second = {
        let context = context.clone();
        tokio::spawn(async move { handle_manual_trade(&context).await })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn cycle_outcomes_are_counted() {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let fixture =
        CycleFixture::with_metrics(quote_body(1900.0), oversold, Some(metrics.clone())).await;

    handle_manual_trade(&fixture.context).await.unwrap();

    let body = metrics.export().unwrap();
    assert!(body.contains("trade_cycles_total{outcome=\"trade\"} 1"));
    assert!(body.contains("trades_recorded_total 1"));
    assert!(body.contains("last_rsi_value 25"));
}

#[tokio::test]
async fn scheduler_runs_cycles_on_its_interval() {
    let fixture = CycleFixture::new(quote_body(1900.0), oversold).await;

    let scheduler = JobScheduler::new(fixture.context.clone(), 1).expect("scheduler");
    scheduler.start().await;
    tokio::time::sleep(Duration::from_millis(2500)).await;
    scheduler.stop().await;

    assert!(fixture.store.len().await >= 1);
    let logs = fixture.context.log_sink.snapshot().await;
    assert!(logs.iter().all(|e| e.message.starts_with("Executed trade: Buy")));
}
