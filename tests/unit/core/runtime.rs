//! Unit tests for runtime wiring

use std::collections::HashMap;
use std::sync::Arc;

use aurix::config::AppConfig;
use aurix::core::runtime::build_job_context;
use aurix::db::InMemoryTradeStore;
use aurix::services::SwissquoteMarketDataProvider;

#[test]
fn test_build_job_context_applies_config() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DATABASE_URL", "postgres://bot@localhost:5432"),
        ("DATABASE_NAME", "aurix"),
        ("RSI_BUY_BELOW", "40"),
        ("RSI_SELL_ABOVE", "60"),
        ("SYNTHETIC_POINTS", "20"),
        ("TRADE_QUERY_LIMIT", "3"),
    ]);
    let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

    let context = build_job_context(
        &config,
        Arc::new(SwissquoteMarketDataProvider::default()),
        Arc::new(InMemoryTradeStore::new()),
        None,
    );

    assert_eq!(context.policy.thresholds.buy_below, 40.0);
    assert_eq!(context.policy.thresholds.sell_above, 60.0);
    assert_eq!(context.window.points, 20);
    assert_eq!(context.trade_query_limit, 3);
    assert_eq!(context.log_sink.capacity(), 100);
    assert!(!context.is_cycle_running());
}
