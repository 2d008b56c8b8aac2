//! Collaborator interfaces consumed by the save wrapper.
//!
//! Each trait generates a `*ContractRef` used for cross-contract calls.

use odra::prelude::*;
use odra::casper_types::U256;

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
}

/// Mints the derivative asset (mAsset) from a base asset (bAsset)
#[odra::external_contract]
pub trait Minter {
    fn mint(
        &mut self,
        input: Address,
        input_quantity: U256,
        min_output_quantity: U256,
        recipient: Address,
    ) -> U256;
}

/// Swaps a feeder asset into the derivative asset
#[odra::external_contract]
pub trait FeederPool {
    fn swap(
        &mut self,
        input: Address,
        output: Address,
        input_quantity: U256,
        min_output_quantity: U256,
        recipient: Address,
    ) -> U256;
}

/// Interest-bearing savings wrapper, returns credits
#[odra::external_contract]
pub trait Savings {
    fn deposit_savings(&mut self, underlying: U256, beneficiary: Address) -> U256;
    fn deposit_savings_with_referrer(
        &mut self,
        underlying: U256,
        beneficiary: Address,
        referrer: Address,
    ) -> U256;
}

/// Rewards vault staking savings credits
#[odra::external_contract]
pub trait BoostedVault {
    fn stake(&mut self, beneficiary: Address, amount: U256);
    fn withdraw_and_unwrap(
        &mut self,
        amount: U256,
        min_amount_out: U256,
        output: Address,
        beneficiary: Address,
        router: Address,
        is_basset_out: bool,
    ) -> U256;
    fn claim_reward(&mut self);
    fn get_reward_token(&self) -> Address;
    fn get_platform_token(&self) -> Address;
}

/// Receipt token minted 1:1 with credits held by the wrapper
#[odra::external_contract]
pub trait AccountingToken {
    fn deposit(&mut self, beneficiary: Address, amount: U256);
    fn withdraw(&mut self, account: Address, amount: U256);
}
