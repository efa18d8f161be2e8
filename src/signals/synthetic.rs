//! Synthetic price window built around a single quote

use rand::Rng;

use crate::config::PriceWindowConfig;
use crate::models::indicators::PricePoint;

/// Jitter `price` into `config.points` points.
///
/// Each point is `price + (u - 0.5) * jitter` with `u` uniform in [0, 1),
/// so every point lies within `jitter / 2` of the quote.
pub fn synthesize_price_window<R: Rng>(
    price: f64,
    config: &PriceWindowConfig,
    rng: &mut R,
) -> Vec<PricePoint> {
    (0..config.points)
        .map(|_| {
            let u: f64 = rng.gen();
            PricePoint::new(price + (u - 0.5) * config.jitter)
        })
        .collect()
}
