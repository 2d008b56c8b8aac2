//! Stake router
//!
//! Routes derivative assets held by the wrapper into the savings wrapper
//! and, when asked to, stakes the resulting credits in the rewards vault.
//!
//! Two custody policies are supported (see [`StakerOfRecord`]):
//! - `Caller`: the vault records the depositor as staker, unstaked credits
//!   go straight to the depositor
//! - `Wrapper`: the wrapper keeps every credit and mints accounting tokens
//!   to the depositor 1:1 with credits received

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::errors::WrapperError;
use crate::interfaces::{AccountingTokenContractRef, BoostedVaultContractRef, SavingsContractRef};
use crate::types::{DepositRoute, StakerOfRecord};

#[odra::module]
pub struct StakeRouter {
    /// Who the vault records as staker
    staker_of_record: Var<StakerOfRecord>,
    /// Receipt token, present only for `StakerOfRecord::Wrapper`
    accounting_token: Var<Option<Address>>,
}

#[odra::module]
impl StakeRouter {
    pub fn init(&mut self, staker_of_record: StakerOfRecord, accounting_token: Option<Address>) {
        if staker_of_record.validate_custody(accounting_token).is_err() {
            self.env().revert(WrapperError::InvalidConfig);
        }
        self.staker_of_record.set(staker_of_record);
        self.accounting_token.set(accounting_token);
    }

    pub fn staker_of_record(&self) -> StakerOfRecord {
        self.staker_of_record.get().unwrap_or(StakerOfRecord::Caller)
    }

    pub fn accounting_token(&self) -> Option<Address> {
        self.accounting_token.get().flatten()
    }

    /// Deposit `amount` of derivative asset (already held by the wrapper)
    /// for `beneficiary`, returning the credits received.
    pub fn route(
        &mut self,
        beneficiary: Address,
        save: Address,
        vault: Address,
        amount: U256,
        stake: bool,
        referrer: Option<Address>,
    ) -> U256 {
        let this = self.env().self_address();
        let accounting_token = self.accounting_token();
        let route = DepositRoute::select(stake, referrer.is_some());

        // Credits stay with the wrapper whenever it stakes them or backs
        // them with accounting tokens.
        let credit_holder = if route.stakes() || accounting_token.is_some() {
            this
        } else {
            beneficiary
        };

        let mut savings = SavingsContractRef::new(self.env(), save);
        let credits = match (route, referrer) {
            (DepositRoute::StakeWithReferrer | DepositRoute::SaveWithReferrer, Some(referrer)) => {
                savings.deposit_savings_with_referrer(amount, credit_holder, referrer)
            }
            _ => savings.deposit_savings(amount, credit_holder),
        };

        if route.stakes() {
            let staker = match self.staker_of_record() {
                StakerOfRecord::Caller => beneficiary,
                StakerOfRecord::Wrapper => this,
            };
            BoostedVaultContractRef::new(self.env(), vault).stake(staker, credits);
        }

        // Minted for staked and unstaked credits alike. Withdrawals redeem
        // only against the pooled vault stake.
        if let Some(token) = accounting_token {
            AccountingTokenContractRef::new(self.env(), token).deposit(beneficiary, credits);
        }

        credits
    }
}
