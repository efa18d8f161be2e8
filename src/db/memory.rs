use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TradeStore;
use crate::error::PersistenceError;
use crate::models::trade::{NewTrade, TradeRecord};

/// Process-local trade store.
#[derive(Default)]
pub struct InMemoryTradeStore {
    trades: RwLock<Vec<TradeRecord>>,
}

impl InMemoryTradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.trades.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.trades.read().await.is_empty()
    }
}

#[async_trait]
impl TradeStore for InMemoryTradeStore {
    async fn insert_trade(&self, trade: NewTrade) -> Result<TradeRecord, PersistenceError> {
        let mut trades = self.trades.write().await;
        let id = trades.len() as i64 + 1;
        let record = TradeRecord::from_new(id, trade);
        trades.push(record.clone());
        Ok(record)
    }

    async fn recent_trades(&self, limit: usize) -> Result<Vec<TradeRecord>, PersistenceError> {
        let trades = self.trades.read().await;
        let mut recent: Vec<TradeRecord> = trades.clone();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        recent.truncate(limit);
        Ok(recent)
    }
}
