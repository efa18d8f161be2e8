//! Swissquote public BBO quote feed

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::DEFAULT_QUOTE_FEED_URL;
use crate::error::{FetchError, QuoteFeedError};
use crate::models::quote::QuoteSnapshot;
use crate::services::market_data::MarketDataProvider;

/// Reads the prime-profile bid from the public quote feed.
///
/// One unauthenticated GET per call, no retry.
#[derive(Clone)]
pub struct SwissquoteMarketDataProvider {
    url: String,
    client: Client,
}

impl SwissquoteMarketDataProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_snapshots(&self) -> Result<Vec<QuoteSnapshot>, QuoteFeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteFeedError::Status(status.as_u16()));
        }
        let body: serde_json::Value = response.json().await?;
        let snapshots: Vec<QuoteSnapshot> = serde_json::from_value(body)?;
        Ok(snapshots)
    }
}

impl Default for SwissquoteMarketDataProvider {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_FEED_URL)
    }
}

#[async_trait]
impl MarketDataProvider for SwissquoteMarketDataProvider {
    async fn get_latest_price(&self) -> Result<f64, FetchError> {
        let result = self
            .fetch_snapshots()
            .await
            .and_then(|snapshots| select_prime_bid(&snapshots));

        match result {
            Ok(price) => {
                debug!(price = price, url = %self.url, "Fetched prime bid");
                Ok(price)
            }
            Err(cause) => {
                error!(error = %cause, url = %self.url, "Error fetching gold price");
                Err(FetchError::from(cause))
            }
        }
    }
}

/// Bid of the first spread profile named "prime" (case-insensitive).
pub fn select_prime_bid(snapshots: &[QuoteSnapshot]) -> Result<f64, QuoteFeedError> {
    if snapshots.is_empty() {
        return Err(QuoteFeedError::Empty);
    }

    let profile = snapshots
        .iter()
        .find_map(|snapshot| snapshot.prime())
        .ok_or(QuoteFeedError::NoPrimeProfile)?;

    profile
        .bid
        .filter(|bid| bid.is_finite())
        .ok_or(QuoteFeedError::MissingPrimeBid)
}
