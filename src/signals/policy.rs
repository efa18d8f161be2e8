//! Maps an oscillator reading onto a Buy/Sell/Hold decision

use crate::models::signal::{TradeDecision, TradeSignal};

/// Oversold/overbought bounds of the policy.
///
/// A reading strictly below `buy_below` buys, strictly above `sell_above`
/// sells; the bounds themselves hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalThresholds {
    pub buy_below: f64,
    pub sell_above: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            buy_below: 30.0,
            sell_above: 70.0,
        }
    }
}

/// Absolute price offsets for the protective levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskOffsets {
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl Default for RiskOffsets {
    fn default() -> Self {
        Self {
            stop_loss: 10.0,
            take_profit: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RsiAnalysis {
    Oversold,
    Overbought,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalPolicy {
    pub thresholds: SignalThresholds,
    pub offsets: RiskOffsets,
}

impl SignalPolicy {
    pub fn new(thresholds: SignalThresholds, offsets: RiskOffsets) -> Self {
        Self { thresholds, offsets }
    }

    pub fn decide(&self, rsi: f64, price: f64) -> TradeDecision {
        match self.analyze_rsi(rsi) {
            RsiAnalysis::Oversold => TradeDecision {
                signal: TradeSignal::Buy,
                stop_loss: Some(price - self.offsets.stop_loss),
                take_profit: Some(price + self.offsets.take_profit),
            },
            RsiAnalysis::Overbought => TradeDecision {
                signal: TradeSignal::Sell,
                stop_loss: Some(price + self.offsets.stop_loss),
                take_profit: Some(price - self.offsets.take_profit),
            },
            RsiAnalysis::Neutral => TradeDecision::hold(),
        }
    }

    fn analyze_rsi(&self, rsi: f64) -> RsiAnalysis {
        if rsi < self.thresholds.buy_below {
            RsiAnalysis::Oversold
        } else if rsi > self.thresholds.sell_above {
            RsiAnalysis::Overbought
        } else {
            RsiAnalysis::Neutral
        }
    }
}
