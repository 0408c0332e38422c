//! Error definitions for the Distributor contract
use odra::prelude::*;

/// Custom errors for the Distributor contract
#[odra::odra_error]
pub enum DistributorError {
    /// Recipient and amount lists are not the same length
    LengthMismatch = 1,

    /// Requested total exceeds the available balance
    InsufficientBalance = 2,

    /// Null identity supplied where a concrete identity is required
    ZeroAddress = 3,

    /// Attempt to set a configuration value it already holds
    NoOpChange = 4,

    /// Withdrawal requested for a token that is not the configured one
    TokenNotSet = 5,

    /// Caller is not allowed to perform this operation
    Unauthorized = 6,

    /// Token collaborator reported a failed transfer
    TransferFailed = 7,

    /// Batch total overflowed
    Overflow = 8,
}
