//! RSI (Relative Strength Index) indicator

use crate::models::indicators::PricePoint;

/// Smallest window the oscillator accepts.
pub const MIN_PRICE_POINTS: usize = 14;

/// Calculate RSI over the whole window
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are averaged over every delta in the window. Returns
/// `None` when fewer than [`MIN_PRICE_POINTS`] points are supplied, when any
/// price is not finite, or when the window is perfectly flat. The result is
/// rounded to 2 decimals.
pub fn calculate_rsi(prices: &[PricePoint]) -> Option<f64> {
    if prices.len() < MIN_PRICE_POINTS {
        return None;
    }
    if prices.iter().any(|p| !p.price.is_finite()) {
        return None;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1].price - pair[0].price;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain: f64 = gains.iter().sum::<f64>() / gains.len() as f64;
    let avg_loss: f64 = losses.iter().sum::<f64>() / losses.len() as f64;

    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { None } else { Some(100.0) };
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Some(round_to_cents(rsi))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
