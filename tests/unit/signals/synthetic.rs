//! Unit tests for the synthetic price window

use aurix::config::PriceWindowConfig;
use aurix::signals::synthetic::synthesize_price_window;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_window_has_configured_length() {
    let mut rng = StdRng::seed_from_u64(7);
    let window = synthesize_price_window(1900.0, &PriceWindowConfig::default(), &mut rng);
    assert_eq!(window.len(), 15);
}

#[test]
fn test_points_stay_within_half_jitter() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = PriceWindowConfig {
        points: 500,
        jitter: 5.0,
    };
    let window = synthesize_price_window(1900.0, &config, &mut rng);
    for point in window {
        assert!((point.price - 1900.0).abs() <= 2.5, "{} out of range", point.price);
    }
}

#[test]
fn test_zero_jitter_is_flat() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = PriceWindowConfig {
        points: 15,
        jitter: 0.0,
    };
    let window = synthesize_price_window(1900.0, &config, &mut rng);
    assert!(window.iter().all(|p| p.price == 1900.0));
}

#[test]
fn test_same_seed_same_window() {
    let config = PriceWindowConfig::default();
    let a = synthesize_price_window(1900.0, &config, &mut StdRng::seed_from_u64(9));
    let b = synthesize_price_window(1900.0, &config, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn test_non_finite_jitter_never_yields_a_reading() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = PriceWindowConfig {
        points: 15,
        jitter: f64::NAN,
    };
    let window = synthesize_price_window(1900.0, &config, &mut rng);
    assert!(aurix::indicators::calculate_rsi(&window).is_none());
}
