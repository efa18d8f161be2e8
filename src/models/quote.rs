//! Wire format of the Swissquote BBO quote feed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One spread profile of a snapshot.
///
/// Only the prime profile's bid is ever read, so every field decodes
/// leniently: a malformed sibling profile must not sink the whole feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadProfilePrice {
    #[serde(default, deserialize_with = "lenient_str")]
    pub spread_profile: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid_spread: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ask_spread: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ask: Option<f64>,
}

impl SpreadProfilePrice {
    pub fn is_prime(&self) -> bool {
        self.spread_profile
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case("prime"))
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_str().map(str::to_string))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    pub platform: String,
    pub server: String,
}

/// One entry of the feed's top-level array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    #[serde(default)]
    pub topo: Option<Topology>,
    #[serde(default)]
    pub spread_profile_prices: Vec<SpreadProfilePrice>,
    #[serde(default)]
    pub ts: Option<i64>,
}

impl QuoteSnapshot {
    pub fn prime(&self) -> Option<&SpreadProfilePrice> {
        self.spread_profile_prices.iter().find(|p| p.is_prime())
    }
}
