//! Process wiring shared by the binaries

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::db::{PostgresTradeStore, TradeStore};
use crate::jobs::context::JobContext;
use crate::logging::LogSink;
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::services::swissquote::SwissquoteMarketDataProvider;
use crate::signals::policy::SignalPolicy;

/// Assemble a job context from configuration and already-built collaborators.
pub fn build_job_context(
    config: &AppConfig,
    data_provider: Arc<dyn MarketDataProvider>,
    trade_store: Arc<dyn TradeStore>,
    metrics: Option<Arc<Metrics>>,
) -> JobContext {
    JobContext::new(
        data_provider,
        trade_store,
        LogSink::new(config.log_capacity, config.log_read_limit),
        metrics,
    )
    .with_policy(SignalPolicy::new(config.thresholds, config.offsets))
    .with_window(config.window)
    .with_trade_query_limit(config.trade_query_limit)
}

/// Connect to PostgreSQL and the quote feed and build the shared context.
///
/// Failing to reach the trade store is fatal.
pub async fn bootstrap(
    config: &AppConfig,
    metrics: Arc<Metrics>,
) -> Result<Arc<JobContext>, Box<dyn std::error::Error + Send + Sync>> {
    info!(database = %config.database.name, "Connecting to PostgreSQL...");
    let store = PostgresTradeStore::connect(&config.database).await?;
    metrics
        .database_connected
        .set(if store.is_available() { 1.0 } else { 0.0 });
    info!("PostgreSQL connected");

    let provider = SwissquoteMarketDataProvider::new(config.quote_feed_url.clone());
    info!(url = %provider.url(), "Quote feed configured");

    info!(
        buy_below = config.thresholds.buy_below,
        sell_above = config.thresholds.sell_above,
        stop_loss_offset = config.offsets.stop_loss,
        take_profit_offset = config.offsets.take_profit,
        "Signal policy"
    );

    Ok(Arc::new(build_job_context(
        config,
        Arc::new(provider),
        Arc::new(store),
        Some(metrics),
    )))
}
