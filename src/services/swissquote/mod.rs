mod provider;

pub use provider::{select_prime_bid, SwissquoteMarketDataProvider};
