//! Job context for dependency injection

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::PriceWindowConfig;
use crate::db::TradeStore;
use crate::indicators::calculate_rsi;
use crate::logging::LogSink;
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::OscillatorFn;
use crate::signals::policy::SignalPolicy;

/// Everything a cycle or an HTTP handler needs, built once at startup.
///
/// The cycle guard serializes cycles: scheduled ticks skip while it is
/// held, manual trades wait for it.
pub struct JobContext {
    pub data_provider: Arc<dyn MarketDataProvider>,
    pub trade_store: Arc<dyn TradeStore>,
    pub log_sink: LogSink,
    pub metrics: Option<Arc<Metrics>>,
    pub policy: SignalPolicy,
    pub window: PriceWindowConfig,
    pub trade_query_limit: usize,
    pub(crate) oscillator: OscillatorFn,
    pub(crate) cycle_guard: Mutex<()>,
}

impl JobContext {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider>,
        trade_store: Arc<dyn TradeStore>,
        log_sink: LogSink,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            data_provider,
            trade_store,
            log_sink,
            metrics,
            policy: SignalPolicy::default(),
            window: PriceWindowConfig::default(),
            trade_query_limit: 10,
            oscillator: calculate_rsi,
            cycle_guard: Mutex::new(()),
        }
    }

    pub fn with_policy(mut self, policy: SignalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_window(mut self, window: PriceWindowConfig) -> Self {
        self.window = window;
        self
    }

    pub fn with_trade_query_limit(mut self, limit: usize) -> Self {
        self.trade_query_limit = limit;
        self
    }

    /// Replace the oscillator (RSI by default).
    pub fn with_oscillator(mut self, oscillator: OscillatorFn) -> Self {
        self.oscillator = oscillator;
        self
    }

    pub fn is_cycle_running(&self) -> bool {
        self.cycle_guard.try_lock().is_err()
    }
}
