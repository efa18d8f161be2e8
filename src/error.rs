//! Error taxonomy for the trade cycle and startup

use thiserror::Error;

/// Detailed reason a quote feed request did not yield a price.
#[derive(Debug, Error)]
pub enum QuoteFeedError {
    #[error("quote feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("quote feed returned HTTP {0}")]
    Status(u16),
    #[error("quote feed body is not a list of snapshots: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid response structure or no data available")]
    Empty,
    #[error("no prime profile found in the data")]
    NoPrimeProfile,
    #[error("prime profile carries no numeric bid")]
    MissingPrimeBid,
}

/// Generic failure surfaced to callers of the price fetcher.
///
/// The concrete cause stays reachable through `source()`.
#[derive(Debug, Error)]
#[error("Failed to fetch gold price data")]
pub struct FetchError {
    #[source]
    pub cause: QuoteFeedError,
}

impl From<QuoteFeedError> for FetchError {
    fn from(cause: QuoteFeedError) -> Self {
        Self { cause }
    }
}

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Insufficient data for RSI calculation")]
    InsufficientData { current_price: f64 },
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to connect to trade store: {0}")]
    Connect(String),
    #[error("failed to initialize trade schema: {0}")]
    Schema(String),
    #[error("failed to store trade: {0}")]
    Insert(String),
    #[error("failed to query trades: {0}")]
    Query(String),
}

/// Any failure that ends a fetch → compute → decide → record cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl CycleError {
    /// Label used for the `trade_cycles_total` metric.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            CycleError::Fetch(_) => "fetch_error",
            CycleError::Compute(_) => "compute_error",
            CycleError::Persistence(_) => "persistence_error",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
