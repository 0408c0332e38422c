//! Error definitions for the price oracle modules
use odra::prelude::*;

/// Custom errors for the price oracle modules
#[odra::odra_error]
pub enum OracleError {
    /// No feed configured or the feed has not reported yet
    FeedNotAvailable = 300,

    /// The feed reported a non-positive price
    InvalidPrice = 301,

    /// Unauthorized access
    Unauthorized = 302,
}
