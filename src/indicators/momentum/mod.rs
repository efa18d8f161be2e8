pub mod rsi;

pub use rsi::{calculate_rsi, MIN_PRICE_POINTS};
