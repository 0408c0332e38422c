//! Event definitions for the Distributor contract
use odra::prelude::*;
use odra::casper_types::{U256, U512};

/// Event emitted when native CSPR is deposited into the pool
#[odra::event]
pub struct Deposit {
    /// Address the funds came from
    pub from: Address,
    /// Amount of CSPR deposited
    pub amount: U512,
}

/// Event emitted when a native CSPR batch is disbursed
#[odra::event]
pub struct CsprBatchSent {
    /// Number of recipients paid
    pub count: u32,
    /// Total CSPR disbursed
    pub total: U512,
}

/// Event emitted when a token batch is disbursed
#[odra::event]
pub struct TokenBatchSent {
    /// Token that was disbursed
    pub token: Address,
    /// Number of recipients paid
    pub count: u32,
    /// Total tokens disbursed
    pub total: U256,
}

/// Event emitted when the native balance is swept to the owner
#[odra::event]
pub struct CsprWithdrawn {
    /// Receiving owner address
    pub to: Address,
    /// Amount of CSPR withdrawn
    pub amount: U512,
}

/// Event emitted when the configured token balance is swept to the owner
#[odra::event]
pub struct TokenWithdrawn {
    /// Token that was withdrawn
    pub token: Address,
    /// Receiving owner address
    pub to: Address,
    /// Amount of tokens withdrawn
    pub amount: U256,
}

/// Event emitted when the operator changes
#[odra::event]
pub struct NewOperator {
    /// The new operator identity
    pub operator: Address,
}

/// Event emitted when the configured token reference changes
#[odra::event]
pub struct NewToken {
    /// The new token reference
    pub token: Address,
}

/// Event emitted when ownership is transferred
#[odra::event]
pub struct OwnershipTransferred {
    /// Previous owner
    pub previous_owner: Address,
    /// New owner
    pub new_owner: Address,
}
