//! Shared data models spanning the bot layers.

pub mod indicators;
pub mod log_entry;
pub mod quote;
pub mod signal;
pub mod trade;

pub use indicators::PricePoint;
pub use log_entry::LogEntry;
pub use quote::{QuoteSnapshot, SpreadProfilePrice};
pub use signal::{TradeDecision, TradeSignal};
pub use trade::{NewTrade, TradeRecord, TradeResponse};
