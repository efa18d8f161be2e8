//! Trade cycle: fetch → compute → decide → record → log

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use handlers::{handle_manual_trade, handle_scheduled_tick};
pub use types::{CycleOutcome, CycleTrigger, TickResult};
