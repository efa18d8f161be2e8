//! Oscillator + policy evaluation over a price window.

use crate::models::indicators::PricePoint;
use crate::models::signal::TradeDecision;
use crate::signals::policy::SignalPolicy;

/// Oscillator used by the engine; the RSI calculator by default.
pub type OscillatorFn = fn(&[PricePoint]) -> Option<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalEvaluation {
    pub rsi: f64,
    pub decision: TradeDecision,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Score the window and apply the policy at `price`.
    ///
    /// `None` means the oscillator had insufficient data.
    pub fn evaluate(
        window: &[PricePoint],
        price: f64,
        oscillator: OscillatorFn,
        policy: &SignalPolicy,
    ) -> Option<SignalEvaluation> {
        let rsi = oscillator(window)?;
        Some(SignalEvaluation {
            rsi,
            decision: policy.decide(rsi, price),
        })
    }
}
