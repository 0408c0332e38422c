//! CEP-18 compatible settlement token
//! Deployable collaborator used to fund the Distributor in tests and
//! deployments; the Distributor itself only calls `balance_of` and `transfer`.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use crate::errors::TokenError;

/// Settlement token module implementing the CEP-18 standard
#[odra::module]
pub struct Token {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl Token {
    /// Initialize the token with name, symbol and decimals
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens (setup harness)
    pub fn mint(&mut self, to: Address, amount: U256) {
        let current_supply = self.total_supply();
        self.total_supply.set(current_supply + amount);

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to,
            value: amount,
        });
    }

    /// Burn tokens
    pub fn burn(&mut self, from: Address, amount: U256) {
        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, current_balance - amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);

        self.env().emit_event(Transfer {
            from,
            to: self.env().self_address(),
            value: amount,
        });
    }

    /// Internal transfer function
    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    /// Internal approve function
    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

/// External interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    /// Approve a spender
    fn approve(&mut self, spender: Address, amount: U256) -> bool;

    /// Get allowance
    fn allowance(&self, owner: Address, spender: Address) -> U256;
}
