//! Trade persistence.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTradeStore;
pub use postgres::PostgresTradeStore;

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::models::trade::{NewTrade, TradeRecord};

/// Insert-only store of executed trades.
#[async_trait]
pub trait TradeStore: Send + Sync {
    /// Append a trade and return it with its assigned id.
    async fn insert_trade(&self, trade: NewTrade) -> Result<TradeRecord, PersistenceError>;

    /// Most recent `limit` trades, newest first.
    async fn recent_trades(&self, limit: usize) -> Result<Vec<TradeRecord>, PersistenceError>;
}
