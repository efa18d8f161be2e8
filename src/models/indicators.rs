use serde::{Deserialize, Serialize};

/// A single point of the (synthetic) price window fed to the oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
}

impl PricePoint {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl From<f64> for PricePoint {
    fn from(price: f64) -> Self {
        Self { price }
    }
}
