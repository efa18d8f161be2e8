//! Aurix: XAU/USD momentum signal bot.
//!
//! Polls a public quote feed, scores momentum with an RSI over a short
//! synthetic window, turns the score into a Buy/Sell/Hold decision and
//! records executed trades.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
