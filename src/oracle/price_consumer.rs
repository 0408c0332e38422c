//! Price consumer - thin reader over a fixed upstream feed
use odra::prelude::*;
use odra::ContractRef;
use super::errors::OracleError;
use super::feed::PriceFeedContractRef;

/// Price consumer bound to one upstream feed at construction
#[odra::module]
pub struct PriceConsumer {
    /// Upstream feed address, fixed at construction
    feed: Var<Address>,
}

#[odra::module]
impl PriceConsumer {
    /// Initialize the consumer with the upstream feed address
    pub fn init(&mut self, feed: Address) {
        self.feed.set(feed);
    }

    /// Get the upstream feed address
    pub fn feed(&self) -> Address {
        self.feed.get_or_revert_with(OracleError::FeedNotAvailable)
    }

    /// Read the latest price and its report time from the feed
    ///
    /// # Returns
    /// `(price, updated_at)` exactly as the feed reported them
    pub fn get_latest_price(&self) -> (i64, u64) {
        let feed = PriceFeedContractRef::new(self.env(), self.feed());
        let round = feed.latest_round();
        (round.price, round.updated_at)
    }

    /// Get the decimals of the upstream feed
    pub fn decimals(&self) -> u8 {
        let feed = PriceFeedContractRef::new(self.env(), self.feed());
        feed.decimals()
    }
}
