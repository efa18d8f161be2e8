//! PostgreSQL trade store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_postgres::{Client, NoTls, Row};

use super::TradeStore;
use crate::config::DatabaseConfig;
use crate::error::PersistenceError;
use crate::models::signal::TradeSignal;
use crate::models::trade::{NewTrade, TradeRecord};

pub struct PostgresTradeStore {
    client: Client,
}

impl PostgresTradeStore {
    /// Connect once, spawn the connection driver and ensure the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, PersistenceError> {
        let mut pg_config: tokio_postgres::Config = config
            .url
            .parse()
            .map_err(|e: tokio_postgres::Error| PersistenceError::Connect(e.to_string()))?;
        pg_config.dbname(&config.name);

        let (client, connection) = pg_config
            .connect(NoTls)
            .await
            .map_err(|e| PersistenceError::Connect(e.to_string()))?;

        // Spawn connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "PostgreSQL connection error");
            }
        });

        let store = Self { client };
        store.init_schema().await?;

        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), PersistenceError> {
        self.client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS trades (
                    id BIGSERIAL PRIMARY KEY,
                    signal TEXT NOT NULL,
                    stop_loss DOUBLE PRECISION NOT NULL,
                    take_profit DOUBLE PRECISION NOT NULL,
                    current_price DOUBLE PRECISION NOT NULL,
                    rsi DOUBLE PRECISION NOT NULL,
                    timestamp TIMESTAMPTZ NOT NULL
                );
                CREATE INDEX IF NOT EXISTS trades_timestamp_idx ON trades (timestamp DESC);",
            )
            .await
            .map_err(|e| PersistenceError::Schema(e.to_string()))
    }

    /// Check whether the connection driver is still alive
    pub fn is_available(&self) -> bool {
        !self.client.is_closed()
    }
}

#[async_trait]
impl TradeStore for PostgresTradeStore {
    async fn insert_trade(&self, trade: NewTrade) -> Result<TradeRecord, PersistenceError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO trades (signal, stop_loss, take_profit, current_price, rsi, timestamp)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING id",
                &[
                    &trade.signal.as_str(),
                    &trade.stop_loss,
                    &trade.take_profit,
                    &trade.current_price,
                    &trade.rsi,
                    &trade.timestamp,
                ],
            )
            .await
            .map_err(|e| PersistenceError::Insert(e.to_string()))?;

        let id: i64 = row.get(0);
        Ok(TradeRecord::from_new(id, trade))
    }

    async fn recent_trades(&self, limit: usize) -> Result<Vec<TradeRecord>, PersistenceError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self
            .client
            .query(
                "SELECT id, signal, stop_loss, take_profit, current_price, rsi, timestamp
                 FROM trades
                 ORDER BY timestamp DESC, id DESC
                 LIMIT $1",
                &[&limit],
            )
            .await
            .map_err(|e| PersistenceError::Query(e.to_string()))?;

        rows.iter().map(row_to_trade).collect()
    }
}

/// Decode the stored `signal` column; only executed trades are ever written.
pub fn decode_signal_column(value: &str) -> Result<TradeSignal, PersistenceError> {
    match TradeSignal::parse(value) {
        Some(TradeSignal::Hold) | None => Err(PersistenceError::Query(format!(
            "unknown signal {:?}",
            value
        ))),
        Some(signal) => Ok(signal),
    }
}

fn row_to_trade(row: &Row) -> Result<TradeRecord, PersistenceError> {
    let signal_str: String = row.get(1);
    let signal = decode_signal_column(&signal_str)?;
    let timestamp: DateTime<Utc> = row.get(6);

    Ok(TradeRecord {
        id: row.get(0),
        signal,
        stop_loss: row.get(2),
        take_profit: row.get(3),
        current_price: row.get(4),
        rsi: row.get(5),
        timestamp,
    })
}
