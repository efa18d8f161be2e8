//! Cycle results

use serde::Serialize;

use crate::error::CycleError;
use crate::models::signal::TradeDecision;
use crate::models::trade::TradeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleTrigger {
    Scheduled,
    Manual,
}

/// Result of a cycle that reached a decision.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub current_price: f64,
    pub rsi: f64,
    pub decision: TradeDecision,
    /// Present only when the decision was actionable and got stored.
    pub record: Option<TradeRecord>,
}

impl CycleOutcome {
    pub fn outcome_label(&self) -> &'static str {
        if self.record.is_some() {
            "trade"
        } else {
            "hold"
        }
    }
}

/// What a scheduler tick did.
#[derive(Debug)]
pub enum TickResult {
    Completed(CycleOutcome),
    Failed(CycleError),
    /// A previous cycle still held the single-flight guard.
    Skipped,
}
