//! Environment-driven configuration

use std::env;
use std::str::FromStr;

use crate::core::scheduler::interval_fits_cron;
use crate::error::ConfigError;
use crate::signals::policy::{RiskOffsets, SignalThresholds};

pub const DEFAULT_QUOTE_FEED_URL: &str =
    "https://forex-data-feed.swissquote.com/public-quotes/bboquotes/instrument/XAU/USD";

/// Current runtime environment (`ENVIRONMENT`, default `development`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// The scheduler only runs in the active runtime modes.
pub fn is_active_environment(environment: &str) -> bool {
    matches!(environment, "development" | "dev" | "production" | "prod")
}

/// Settings for the synthetic price window fed to the oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWindowConfig {
    pub points: usize,
    pub jitter: f64,
}

impl Default for PriceWindowConfig {
    fn default() -> Self {
        Self {
            points: 15,
            jitter: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database: DatabaseConfig,
    pub quote_feed_url: String,
    pub port: u16,
    pub evaluation_interval_seconds: u64,
    pub thresholds: SignalThresholds,
    pub offsets: RiskOffsets,
    pub window: PriceWindowConfig,
    pub log_capacity: usize,
    pub log_read_limit: usize,
    pub trade_query_limit: usize,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `DATABASE_URL` and `DATABASE_NAME` are mandatory; everything else
    /// falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            name: required("DATABASE_NAME")?,
        };

        let defaults_window = PriceWindowConfig::default();
        let defaults_thresholds = SignalThresholds::default();
        let defaults_offsets = RiskOffsets::default();

        let thresholds = SignalThresholds {
            buy_below: parse_or(&lookup, "RSI_BUY_BELOW", defaults_thresholds.buy_below)?,
            sell_above: parse_or(&lookup, "RSI_SELL_ABOVE", defaults_thresholds.sell_above)?,
        };
        if !(0.0..=100.0).contains(&thresholds.buy_below)
            || !(0.0..=100.0).contains(&thresholds.sell_above)
            || thresholds.buy_below >= thresholds.sell_above
        {
            return Err(ConfigError::Invalid {
                key: "RSI_BUY_BELOW/RSI_SELL_ABOVE",
                value: format!("{}/{}", thresholds.buy_below, thresholds.sell_above),
            });
        }

        // 0 disables the scheduler; anything else must tick evenly
        let evaluation_interval_seconds: u64 = parse_or(&lookup, "EVAL_INTERVAL_SECONDS", 60)?;
        if evaluation_interval_seconds != 0 && !interval_fits_cron(evaluation_interval_seconds) {
            return Err(ConfigError::Invalid {
                key: "EVAL_INTERVAL_SECONDS",
                value: evaluation_interval_seconds.to_string(),
            });
        }

        let offsets = RiskOffsets {
            stop_loss: non_negative(&lookup, "STOP_LOSS_OFFSET", defaults_offsets.stop_loss)?,
            take_profit: non_negative(&lookup, "TAKE_PROFIT_OFFSET", defaults_offsets.take_profit)?,
        };

        let window = PriceWindowConfig {
            points: parse_or(&lookup, "SYNTHETIC_POINTS", defaults_window.points)?,
            jitter: non_negative(&lookup, "PRICE_JITTER", defaults_window.jitter)?,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            database,
            quote_feed_url: lookup("QUOTE_FEED_URL")
                .unwrap_or_else(|| DEFAULT_QUOTE_FEED_URL.to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            evaluation_interval_seconds,
            thresholds,
            offsets,
            window,
            log_capacity: parse_or(&lookup, "LOG_CAPACITY", 100)?,
            log_read_limit: parse_or(&lookup, "LOG_READ_LIMIT", 5)?,
            trade_query_limit: parse_or(&lookup, "TRADE_QUERY_LIMIT", 10)?,
        })
    }

    pub fn scheduler_enabled(&self) -> bool {
        is_active_environment(&self.environment) && self.evaluation_interval_seconds > 0
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::Invalid { key, value: raw }),
        },
        None => Ok(default),
    }
}

/// Finite, non-negative float setting.
fn non_negative<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f64 = parse_or(lookup, key, default)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}
