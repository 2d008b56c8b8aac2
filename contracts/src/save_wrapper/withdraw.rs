//! Withdraw pipeline and reward sweeping.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::errors::WrapperError;
use crate::events::{RewardsClaimed, Withdrawn};
use crate::interfaces::{AccountingTokenContractRef, BoostedVaultContractRef};
use super::SaveWrapper;

impl SaveWrapper {
    /// accounting token → retire → vault unstake-and-unwrap
    pub(super) fn unwrap_to(
        &mut self,
        amount: U256,
        min_amount_out: U256,
        output: Address,
        beneficiary: Address,
        router: Address,
        is_basset_out: bool,
    ) -> U256 {
        let accounting_token = match self.router.accounting_token() {
            Some(token) => token,
            None => self.env().revert(WrapperError::AccountingTokenNotSet),
        };

        let caller = self.env().caller();
        let this = self.env().self_address();
        self.pull_tokens(accounting_token, caller, amount);
        AccountingTokenContractRef::new(self.env(), accounting_token).withdraw(this, amount);

        let mut vault = BoostedVaultContractRef::new(self.env(), self.home_vault());
        let output_quantity = vault.withdraw_and_unwrap(
            amount,
            min_amount_out,
            output,
            beneficiary,
            router,
            is_basset_out,
        );
        if output_quantity < min_amount_out {
            self.env().revert(WrapperError::WithdrawSlippage);
        }

        self.env().emit_event(Withdrawn {
            account: caller,
            amount,
            output,
            output_quantity,
        });
        output_quantity
    }

    /// Claim from the vault and send whatever reward and platform tokens the
    /// wrapper holds to the caller.
    pub(super) fn claim_and_sweep(&mut self) {
        let caller = self.env().caller();
        let mut vault = BoostedVaultContractRef::new(self.env(), self.home_vault());
        vault.claim_reward();

        let reward_amount = self.sweep(vault.get_reward_token(), caller);
        let platform_amount = self.sweep(vault.get_platform_token(), caller);

        self.env().emit_event(RewardsClaimed {
            by: caller,
            reward_amount,
            platform_amount,
        });
    }

    fn sweep(&self, token: Address, to: Address) -> U256 {
        let balance = self.own_balance(token);
        if !balance.is_zero() {
            self.push_tokens(token, to, balance);
        }
        balance
    }
}
