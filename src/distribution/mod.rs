//! Batch value distribution module
//!
//! This module provides the Distributor contract: a pooled-fund ledger
//! that pays out native CSPR or a CEP-18 token to many recipients in one
//! atomic call, with owner-gated withdrawal and configuration.

pub mod distributor;
pub mod errors;
pub mod events;

#[cfg(test)]
mod tests;

pub use distributor::Distributor;
pub use errors::DistributorError;
pub use events::*;
