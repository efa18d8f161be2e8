use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSignal {
    Buy,
    Sell,
    Hold,
}

impl TradeSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSignal::Buy => "Buy",
            TradeSignal::Sell => "Sell",
            TradeSignal::Hold => "Hold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Buy" => Some(TradeSignal::Buy),
            "Sell" => Some(TradeSignal::Sell),
            "Hold" => Some(TradeSignal::Hold),
            _ => None,
        }
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the signal policy.
///
/// Levels are only present for actionable (Buy/Sell) decisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub signal: TradeSignal,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
}

impl TradeDecision {
    pub fn hold() -> Self {
        Self {
            signal: TradeSignal::Hold,
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.signal != TradeSignal::Hold
    }

    /// `(stop_loss, take_profit)` for actionable decisions.
    pub fn levels(&self) -> Option<(f64, f64)> {
        match (self.signal, self.stop_loss, self.take_profit) {
            (TradeSignal::Hold, _, _) => None,
            (_, Some(stop_loss), Some(take_profit)) => Some((stop_loss, take_profit)),
            _ => None,
        }
    }
}
