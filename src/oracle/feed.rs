//! Price feed collaborator surface
//!
//! The consumer only ever reads an upstream feed; the `StaticPriceFeed`
//! module is a reference feed with an admin-set price for local networks
//! and tests.
use odra::prelude::*;
use super::errors::OracleError;

/// A single price report from an upstream feed
#[odra::odra_type]
pub struct PriceRound {
    /// Reported price, scaled by the feed's decimals
    pub price: i64,
    /// Block time of the report
    pub updated_at: u64,
}

/// External interface of an upstream price feed
#[odra::external_contract]
pub trait PriceFeed {
    /// Get the latest price report
    fn latest_round(&self) -> PriceRound;

    /// Get the feed's decimals
    fn decimals(&self) -> u8;
}

/// Reference feed with an admin-set price
#[odra::module]
pub struct StaticPriceFeed {
    /// Admin address
    admin: Var<Address>,
    /// Feed decimals
    decimals: Var<u8>,
    /// Latest report
    round: Var<PriceRound>,
}

#[odra::module]
impl StaticPriceFeed {
    /// Initialize the feed; the deployer becomes the admin
    pub fn init(&mut self, decimals: u8) {
        let caller = self.env().caller();
        self.admin.set(caller);
        self.decimals.set(decimals);
    }

    /// Report a new price (admin only)
    pub fn set_price(&mut self, price: i64) {
        self.only_admin();

        if price <= 0 {
            self.env().revert(OracleError::InvalidPrice);
        }

        self.round.set(PriceRound {
            price,
            updated_at: self.env().get_block_time(),
        });
    }

    /// Get the latest price report
    pub fn latest_round(&self) -> PriceRound {
        self.round.get_or_revert_with(OracleError::FeedNotAvailable)
    }

    /// Get the feed's decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Check if caller is admin
    fn only_admin(&self) {
        let caller = self.env().caller();
        let admin = self.admin.get_or_revert_with(OracleError::Unauthorized);
        if caller != admin {
            self.env().revert(OracleError::Unauthorized);
        }
    }
}
