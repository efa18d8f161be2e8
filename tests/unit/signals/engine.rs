//! Unit tests for signal engine

use aurix::indicators::calculate_rsi;
use aurix::models::{PricePoint, TradeSignal};
use aurix::signals::engine::SignalEngine;
use aurix::signals::policy::SignalPolicy;

fn rising_window(count: usize) -> Vec<PricePoint> {
    (0..count).map(|i| PricePoint::new(1900.0 + i as f64)).collect()
}

#[test]
fn test_evaluate_insufficient_data() {
    let window = rising_window(10);
    let result = SignalEngine::evaluate(&window, 1900.0, calculate_rsi, &SignalPolicy::default());
    assert!(result.is_none());
}

#[test]
fn test_evaluate_rising_window_sells() {
    let window = rising_window(15);
    let evaluation =
        SignalEngine::evaluate(&window, 1914.0, calculate_rsi, &SignalPolicy::default())
            .expect("evaluation");
    assert_eq!(evaluation.rsi, 100.0);
    assert_eq!(evaluation.decision.signal, TradeSignal::Sell);
    assert_eq!(evaluation.decision.stop_loss, Some(1924.0));
}

#[test]
fn test_evaluate_with_forced_oscillator() {
    fn forced(_: &[PricePoint]) -> Option<f64> {
        Some(25.0)
    }
    let evaluation = SignalEngine::evaluate(&[], 1900.0, forced, &SignalPolicy::default())
        .expect("evaluation");
    assert_eq!(evaluation.decision.signal, TradeSignal::Buy);
    assert_eq!(evaluation.decision.levels(), Some((1890.0, 1920.0)));
}
