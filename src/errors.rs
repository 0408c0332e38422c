//! Error definitions for the CEP-18 token collaborator
use odra::prelude::*;

/// Custom errors for the token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,
}
