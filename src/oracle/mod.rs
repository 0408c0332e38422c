//! Price oracle modules
//!
//! A thin consumer contract bound to one upstream price feed, plus the
//! feed collaborator surface it reads through.

pub mod feed;
pub mod price_consumer;
pub mod errors;

pub use feed::{PriceRound, StaticPriceFeed};
pub use price_consumer::PriceConsumer;
pub use errors::OracleError;
