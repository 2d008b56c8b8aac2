//! Save Wrapper Contract
//!
//! Single entry point that takes a user's base asset through the savings
//! stack in one call, and back out again:
//!
//! - deposit: pull bAsset → mint mAsset → deposit into savings → optionally
//!   stake credits in the rewards vault
//! - withdraw: pull and retire accounting tokens → vault unstake-and-unwrap
//!   into the requested output asset
//!
//! Every entry point is all-or-nothing: a failing collaborator call reverts
//! the whole call, including anything already moved.
//!
//! Guards per entry point:
//!
//! | Entry point | Role | Guards |
//! |---|---|---|
//! | `toggle_contract_active` | owner | none |
//! | `approve*` | owner | none |
//! | `claim_rewards` | owner | none |
//! | `save_*` | any | pause (+ reentrancy when `guard_deposits`) |
//! | `withdraw_and_unwrap` | any | pause + reentrancy |

use odra::prelude::*;
use odra::casper_types::U256;
use crate::access_control::AccessGuard;
use crate::errors::WrapperError;
use crate::events::{ApprovalGranted, ContractActiveToggled, RewardsClaimed, Saved, Withdrawn};
use crate::reentrancy::ReentrancyGuard;
use crate::stake_router::StakeRouter;
use crate::types::{is_zero_address, normalize_referrer, ApprovalBundle, ApprovalRequest, StakerOfRecord};

mod approvals;
mod deposit;
mod token_adapter;
mod withdraw;

/// Save Wrapper Contract
#[odra::module(events = [ContractActiveToggled, ApprovalGranted, Saved, Withdrawn, RewardsClaimed])]
pub struct SaveWrapper {
    /// Owner and pause flag
    access: SubModule<AccessGuard>,
    /// Lock around value-moving pipelines
    lock: SubModule<ReentrancyGuard>,
    /// Savings/vault routing and custody policy
    router: SubModule<StakeRouter>,
    /// Vault used for withdrawals and reward claims
    vault: Var<Address>,
    /// Referrer applied by the entry points that take none
    default_referrer: Var<Option<Address>>,
    /// Whether deposit entry points take the reentrancy lock
    guard_deposits: Var<bool>,
}

#[odra::module]
impl SaveWrapper {
    /// Initialize the wrapper; the deployer becomes the owner
    ///
    /// # Arguments
    /// * `vault` - Rewards vault for withdrawals and reward claims
    /// * `staker_of_record` - Who the vault records as staker
    /// * `accounting_token` - Receipt token, required iff staking for the wrapper
    /// * `default_referrer` - Referrer used by `save_via_mint`, `save_and_stake`, `save_via_feeder_pool`
    /// * `guard_deposits` - Whether deposit entry points are reentrancy guarded
    pub fn init(
        &mut self,
        vault: Address,
        staker_of_record: StakerOfRecord,
        accounting_token: Option<Address>,
        default_referrer: Option<Address>,
        guard_deposits: bool,
    ) {
        if is_zero_address(&vault) {
            self.env().revert(WrapperError::InvalidAddress);
        }

        let owner = self.env().caller();
        self.access.init(owner);
        self.router.init(staker_of_record, accounting_token);
        self.vault.set(vault);
        self.default_referrer.set(normalize_referrer(default_referrer));
        self.guard_deposits.set(guard_deposits);
    }

    // ========== Admin Functions ==========

    /// Pause or unpause the pausable entry points (owner only)
    pub fn toggle_contract_active(&mut self) {
        let paused = self.access.toggle();
        self.env().emit_event(ContractActiveToggled {
            paused,
            by: self.env().caller(),
        });
    }

    /// Grant `spender` unlimited allowance over `token` (owner only)
    pub fn approve(&mut self, token: Address, spender: Address) {
        self.access.require_owner();
        self.grant(ApprovalRequest::Single { token, spender });
    }

    /// Grant `spender` unlimited allowance over every token in `tokens` (owner only)
    pub fn approve_many(&mut self, tokens: Vec<Address>, spender: Address) {
        self.access.require_owner();
        self.grant(ApprovalRequest::Many { tokens, spender });
    }

    /// Grant the allowances the pipelines rely on (owner only):
    /// mAsset → savings, savings → vault, each bAsset → mAsset and
    /// each feeder asset → its feeder pool
    pub fn approve_bundle(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        bassets: Vec<Address>,
        feeder_pools: Vec<Address>,
        feeder_assets: Vec<Address>,
    ) {
        self.access.require_owner();
        self.grant(ApprovalRequest::Bundle(ApprovalBundle {
            masset,
            save,
            vault,
            bassets,
            feeder_pools,
            feeder_assets,
        }));
    }

    /// Claim vault rewards and sweep reward and platform tokens to the owner
    pub fn claim_rewards(&mut self) {
        self.access.require_owner();
        self.claim_and_sweep();
    }

    // ========== Deposit Functions ==========

    /// Mint mAsset from `amount` of `basset` and deposit it into savings,
    /// staking the credits when `stake` is set
    pub fn save_via_mint(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        basset: Address,
        amount: U256,
        min_out: U256,
        stake: bool,
    ) {
        let referrer = self.default_referrer();
        self.save_via_mint_with_referrer_internal(
            masset, save, vault, basset, amount, min_out, stake, referrer,
        );
    }

    /// Same as `save_via_mint`, crediting `referrer` with the deposit
    pub fn save_via_mint_with_referrer(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        basset: Address,
        amount: U256,
        min_out: U256,
        stake: bool,
        referrer: Address,
    ) {
        self.save_via_mint_with_referrer_internal(
            masset,
            save,
            vault,
            basset,
            amount,
            min_out,
            stake,
            normalize_referrer(Some(referrer)),
        );
    }

    /// Deposit `amount` of mAsset the caller already holds
    pub fn save_and_stake(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        amount: U256,
        stake: bool,
    ) {
        self.require_deposit_guards();
        let referrer = self.default_referrer();
        self.with_deposit_lock(|wrapper| {
            wrapper.save_direct(masset, save, vault, amount, stake, referrer)
        });
    }

    /// Swap `amount` of `feeder_asset` into mAsset through `feeder_pool`,
    /// then deposit it
    pub fn save_via_feeder_pool(
        &mut self,
        masset: Address,
        save: Address,
        vault: Address,
        feeder_pool: Address,
        feeder_asset: Address,
        amount: U256,
        min_out: U256,
        stake: bool,
    ) {
        self.require_deposit_guards();
        let referrer = self.default_referrer();
        self.with_deposit_lock(|wrapper| {
            wrapper.save_via_swap(
                masset,
                save,
                vault,
                feeder_pool,
                feeder_asset,
                amount,
                min_out,
                stake,
                referrer,
            )
        });
    }

    // ========== Withdraw Functions ==========

    /// Retire `amount` accounting tokens and unstake-and-unwrap the backing
    /// credits into `output` for `beneficiary`, returning the output quantity
    pub fn withdraw_and_unwrap(
        &mut self,
        amount: U256,
        min_amount_out: U256,
        output: Address,
        beneficiary: Address,
        router: Address,
        is_basset_out: bool,
    ) -> U256 {
        self.access.require_active();
        self.non_reentrant(|wrapper| {
            wrapper.unwrap_to(amount, min_amount_out, output, beneficiary, router, is_basset_out)
        })
    }

    // ========== View Functions ==========

    pub fn owner(&self) -> Option<Address> {
        self.access.owner()
    }

    pub fn is_paused(&self) -> bool {
        self.access.is_paused()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn vault(&self) -> Option<Address> {
        self.vault.get()
    }

    pub fn accounting_token(&self) -> Option<Address> {
        self.router.accounting_token()
    }

    pub fn staker_of_record(&self) -> StakerOfRecord {
        self.router.staker_of_record()
    }

    pub fn default_referrer(&self) -> Option<Address> {
        self.default_referrer.get().flatten()
    }

    /// Whether deposit entry points are protected by the reentrancy lock;
    /// `withdraw_and_unwrap` always is
    pub fn deposits_guarded(&self) -> bool {
        self.guard_deposits.get().unwrap_or(false)
    }
}

impl SaveWrapper {
    fn save_via_mint_with_referrer_internal(
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
        self.require_deposit_guards();
        self.with_deposit_lock(|wrapper| {
            wrapper.save_via_mint_internal(masset, save, vault, basset, amount, min_out, stake, referrer)
        });
    }

    /// Guards checked before any deposit touches a collaborator
    fn require_deposit_guards(&self) {
        self.access.require_active();
    }

    /// Run `f` under the lock when deposits are configured as guarded
    fn with_deposit_lock<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        if self.deposits_guarded() {
            self.non_reentrant(f)
        } else {
            f(self)
        }
    }

    /// Run `f` holding the reentrancy lock
    fn non_reentrant<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.lock.enter();
        let result = f(self);
        self.lock.exit();
        result
    }

    fn home_vault(&self) -> Address {
        match self.vault.get() {
            Some(vault) => vault,
            None => self.env().revert(WrapperError::InvalidConfig),
        }
    }
}
