use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::signal::TradeSignal;

/// Trade about to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrade {
    pub signal: TradeSignal,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub current_price: f64,
    pub rsi: f64,
    pub timestamp: DateTime<Utc>,
}

/// A persisted, immutable trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub id: i64,
    pub signal: TradeSignal,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub current_price: f64,
    pub rsi: f64,
    pub timestamp: DateTime<Utc>,
}

impl TradeRecord {
    pub fn from_new(id: i64, trade: NewTrade) -> Self {
        Self {
            id,
            signal: trade.signal,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            current_price: trade.current_price,
            rsi: trade.rsi,
            timestamp: trade.timestamp,
        }
    }
}

/// Transport shape of a trade: identifier and timestamp as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub id: String,
    pub signal: TradeSignal,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub current_price: f64,
    pub rsi: f64,
    pub timestamp: String,
}

impl From<TradeRecord> for TradeResponse {
    fn from(record: TradeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            signal: record.signal,
            stop_loss: record.stop_loss,
            take_profit: record.take_profit,
            current_price: record.current_price,
            rsi: record.rsi,
            timestamp: record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
