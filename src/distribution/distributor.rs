//! Distributor - pooled-fund batch payout contract
//!
//! The Distributor holds a native CSPR balance and CEP-18 token balances
//! and disburses them to many recipients in one atomic call. Withdrawals
//! and configuration are owner-gated; a secondary operator may trigger
//! disbursements but cannot sweep funds.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use odra::ContractRef;
use super::errors::DistributorError;
use super::events::{
    CsprBatchSent, CsprWithdrawn, Deposit, NewOperator, NewToken, OwnershipTransferred,
    TokenBatchSent, TokenWithdrawn,
};
use crate::token::Cep18TokenContractRef;

/// Distributor contract
#[odra::module]
pub struct Distributor {
    /// Contract owner, holds full administrative rights
    owner: Var<Address>,
    /// Secondary identity allowed to trigger disbursements
    operator: Var<Option<Address>>,
    /// Configured token reference, eligible for the restricted withdrawal path
    token: Var<Option<Address>>,
}

#[odra::module]
impl Distributor {
    /// Initialize the distributor; the deployer becomes the owner
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.owner.set(caller);
        self.operator.set(None);
        self.token.set(None);
    }

    /// Accept native CSPR into the pool
    #[odra(payable)]
    pub fn deposit(&mut self) {
        let amount = self.env().attached_value();
        self.env().emit_event(Deposit {
            from: self.env().caller(),
            amount,
        });
    }

    /// Disburse native CSPR to many recipients in one atomic call
    ///
    /// # Arguments
    /// * `recipients` - Addresses to pay, in order
    /// * `amounts` - CSPR amount for each recipient
    pub fn batch_transfer_cspr(&mut self, recipients: Vec<Address>, amounts: Vec<U512>) {
        self.only_owner_or_operator();

        if recipients.len() != amounts.len() {
            self.env().revert(DistributorError::LengthMismatch);
        }

        let mut total = U512::zero();
        for amount in &amounts {
            total = total.checked_add(*amount).unwrap_or_else(|| {
                self.env().revert(DistributorError::Overflow);
            });
        }

        if total > self.env().self_balance() {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
            self.env().transfer_tokens(recipient, amount);
        }

        self.env().emit_event(CsprBatchSent {
            count: recipients.len() as u32,
            total,
        });
    }

    /// Disburse a CEP-18 token to many recipients in one atomic call
    ///
    /// The token is an explicit parameter and does not have to equal the
    /// configured reference, so any token the pool happens to hold can be
    /// distributed.
    ///
    /// # Arguments
    /// * `recipients` - Addresses to pay, in order
    /// * `amounts` - Token amount for each recipient
    /// * `token` - Address of the CEP-18 token to disburse
    pub fn batch_transfer_token(
        &mut self,
        recipients: Vec<Address>,
        amounts: Vec<U256>,
        token: Address,
    ) {
        self.only_owner_or_operator();

        if recipients.len() != amounts.len() {
            self.env().revert(DistributorError::LengthMismatch);
        }

        let mut total = U256::zero();
        for amount in &amounts {
            total = total.checked_add(*amount).unwrap_or_else(|| {
                self.env().revert(DistributorError::Overflow);
            });
        }

        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        let held = token_ref.balance_of(self.env().self_address());
        if total > held {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
            let success = token_ref.transfer(*recipient, *amount);
            if !success {
                self.env().revert(DistributorError::TransferFailed);
            }
        }

        self.env().emit_event(TokenBatchSent {
            token,
            count: recipients.len() as u32,
            total,
        });
    }

    /// Sweep the entire native balance to the owner
    pub fn withdraw_cspr(&mut self) {
        self.only_owner();

        let balance = self.env().self_balance();
        if balance.is_zero() {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        let owner = self.owner();
        self.env().transfer_tokens(&owner, &balance);

        self.env().emit_event(CsprWithdrawn {
            to: owner,
            amount: balance,
        });
    }

    /// Sweep the entire balance of the configured token to the owner
    ///
    /// Only the currently configured token reference may be swept this way;
    /// any other token address is rejected.
    pub fn withdraw_token(&mut self, token: Option<Address>) {
        self.only_owner();

        let requested = token.unwrap_or_else(|| {
            self.env().revert(DistributorError::ZeroAddress);
        });

        if self.token.get_or_default() != Some(requested) {
            self.env().revert(DistributorError::TokenNotSet);
        }

        let mut token_ref = Cep18TokenContractRef::new(self.env(), requested);
        let balance = token_ref.balance_of(self.env().self_address());
        if balance.is_zero() {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        let owner = self.owner();
        let success = token_ref.transfer(owner, balance);
        if !success {
            self.env().revert(DistributorError::TransferFailed);
        }

        self.env().emit_event(TokenWithdrawn {
            token: requested,
            to: owner,
            amount: balance,
        });
    }

    /// Set the operator identity
    ///
    /// Rejects the null identity, the current operator, and the owner.
    pub fn set_operator(&mut self, new_operator: Option<Address>) {
        self.only_owner();

        let new_operator = new_operator.unwrap_or_else(|| {
            self.env().revert(DistributorError::ZeroAddress);
        });

        if self.operator.get_or_default() == Some(new_operator) || new_operator == self.owner() {
            self.env().revert(DistributorError::NoOpChange);
        }

        self.operator.set(Some(new_operator));

        self.env().emit_event(NewOperator {
            operator: new_operator,
        });
    }

    /// Set the token reference eligible for the restricted withdrawal path
    ///
    /// Rejects the null identity and the value already in place. Once set,
    /// the reference can only move to a different token, never back to unset.
    pub fn set_token(&mut self, new_token: Option<Address>) {
        self.only_owner();

        let new_token = new_token.unwrap_or_else(|| {
            self.env().revert(DistributorError::ZeroAddress);
        });

        if self.token.get_or_default() == Some(new_token) {
            self.env().revert(DistributorError::NoOpChange);
        }

        self.token.set(Some(new_token));

        self.env().emit_event(NewToken { token: new_token });
    }

    /// Transfer ownership to a new identity
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.only_owner();

        let previous_owner = self.owner();
        if new_owner == previous_owner {
            self.env().revert(DistributorError::NoOpChange);
        }

        self.owner.set(new_owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    // ============ View Functions ============

    /// Get the owner address
    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(DistributorError::Unauthorized)
    }

    /// Get the operator identity, if one is set
    pub fn operator(&self) -> Option<Address> {
        self.operator.get_or_default()
    }

    /// Get the configured token reference, if one is set
    pub fn token(&self) -> Option<Address> {
        self.token.get_or_default()
    }

    /// Get the pooled native balance
    pub fn cspr_balance(&self) -> U512 {
        self.env().self_balance()
    }

    // ============ Internal Functions ============

    /// Check that the caller is the owner
    fn only_owner(&self) {
        let caller = self.env().caller();
        if caller != self.owner() {
            self.env().revert(DistributorError::Unauthorized);
        }
    }

    /// Check that the caller may trigger disbursements
    fn only_owner_or_operator(&self) {
        let caller = self.env().caller();
        if caller == self.owner() {
            return;
        }
        if self.operator.get_or_default() == Some(caller) {
            return;
        }
        self.env().revert(DistributorError::Unauthorized);
    }
}
