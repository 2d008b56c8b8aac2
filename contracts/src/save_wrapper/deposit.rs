//! Deposit pipelines: bring the caller's asset into mAsset held by the
//! wrapper, then hand it to the stake router.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::errors::WrapperError;
use crate::events::Saved;
use crate::interfaces::{FeederPoolContractRef, MinterContractRef};
use crate::types::{is_zero_address, StakerOfRecord};
use super::SaveWrapper;

impl SaveWrapper {
    /// bAsset → mint → save (→ stake)
    pub(super) fn save_via_mint_internal(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        basset: Address,
        amount: U256,
        min_out: U256,
        stake: bool,
        referrer: Option<Address>,
    ) {
        self.require_deposit_addresses(&[masset, save, vault, basset]);
        self.require_custody_vault(vault);

        let caller = self.env().caller();
        let this = self.env().self_address();
        self.pull_tokens(basset, caller, amount);

        let mut minter = MinterContractRef::new(self.env(), masset);
        let minted = minter.mint(basset, amount, min_out, this);
        if minted < min_out {
            self.env().revert(WrapperError::MintSlippage);
        }

        let credits = self.router.route(caller, save, vault, minted, stake, referrer);
        self.env().emit_event(Saved {
            account: caller,
            input_asset: basset,
            input_amount: amount,
            credits,
            staked: stake,
            referrer,
        });
    }

    /// mAsset → save (→ stake)
    pub(super) fn save_direct(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        amount: U256,
        stake: bool,
        referrer: Option<Address>,
    ) {
        self.require_deposit_addresses(&[masset, save, vault]);
        self.require_custody_vault(vault);

        let caller = self.env().caller();
        self.pull_tokens(masset, caller, amount);

        let credits = self.router.route(caller, save, vault, amount, stake, referrer);
        self.env().emit_event(Saved {
            account: caller,
            input_asset: masset,
            input_amount: amount,
            credits,
            staked: stake,
            referrer,
        });
    }

    /// fAsset → feeder pool swap → save (→ stake)
    pub(super) fn save_via_swap(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        feeder_pool: Address,
        feeder_asset: Address,
        amount: U256,
        min_out: U256,
        stake: bool,
        referrer: Option<Address>,
    ) {
        self.require_deposit_addresses(&[masset, save, vault, feeder_pool, feeder_asset]);
        self.require_custody_vault(vault);

        let caller = self.env().caller();
        let this = self.env().self_address();
        self.pull_tokens(feeder_asset, caller, amount);

        let mut pool = FeederPoolContractRef::new(self.env(), feeder_pool);
        let swapped = pool.swap(feeder_asset, masset, amount, min_out, this);
        if swapped < min_out {
            self.env().revert(WrapperError::SwapSlippage);
        }

        let credits = self.router.route(caller, save, vault, swapped, stake, referrer);
        self.env().emit_event(Saved {
            account: caller,
            input_asset: feeder_asset,
            input_amount: amount,
            credits,
            staked: stake,
            referrer,
        });
    }

    fn require_deposit_addresses(&self, addresses: &[Address]) {
        if addresses.iter().any(is_zero_address) {
            self.env().revert(WrapperError::InvalidAddress);
        }
    }

    /// Accounting tokens are only redeemable against the configured vault,
    /// so custodial deposits may not stake anywhere else.
    fn require_custody_vault(&self, vault: Address) {
        if self.router.staker_of_record() == StakerOfRecord::Wrapper && vault != self.home_vault() {
            self.env().revert(WrapperError::VaultMismatch);
        }
    }
}
