//! External data sources.

pub mod market_data;
pub mod swissquote;

pub use market_data::MarketDataProvider;
pub use swissquote::SwissquoteMarketDataProvider;
