//! Prometheus metrics

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub trade_cycles_total: IntCounterVec,
    pub trades_recorded_total: IntCounter,
    pub last_rsi_value: Gauge,
    pub database_connected: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let trade_cycles_total = IntCounterVec::new(
            Opts::new("trade_cycles_total", "Trade cycles by outcome"),
            &["outcome"],
        )?;
        let trades_recorded_total =
            IntCounter::new("trades_recorded_total", "Trades written to the store")?;
        let last_rsi_value = Gauge::new("last_rsi_value", "Most recent oscillator reading")?;
        let database_connected =
            Gauge::new("database_connected", "1 when the trade store is connected")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(trade_cycles_total.clone()))?;
        registry.register(Box::new(trades_recorded_total.clone()))?;
        registry.register(Box::new(last_rsi_value.clone()))?;
        registry.register(Box::new(database_connected.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            trade_cycles_total,
            trades_recorded_total,
            last_rsi_value,
            database_connected,
        })
    }

    pub fn record_cycle(&self, outcome: &str) {
        self.trade_cycles_total.with_label_values(&[outcome]).inc();
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
