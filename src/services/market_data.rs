//! Market data provider interface.

use async_trait::async_trait;

use crate::error::FetchError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get the latest tradable price of the instrument.
    async fn get_latest_price(&self) -> Result<f64, FetchError>;
}
