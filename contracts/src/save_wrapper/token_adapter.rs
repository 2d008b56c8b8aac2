//! Checked CEP-18 token calls.
//!
//! Every transfer is verified before and after the call: balance and
//! allowance are checked up front and a `false` return is treated as a
//! failed transfer.

use odra::prelude::*;
use odra::ContractRef;
use odra::casper_types::U256;
use crate::errors::WrapperError;
use crate::interfaces::Cep18TokenContractRef;
use super::SaveWrapper;

impl SaveWrapper {
    /// Pull tokens from `from` into the wrapper (deposit flow)
    pub(super) fn pull_tokens(&self, token_address: Address, from: Address, amount: U256) {
        let this = self.env().self_address();
        let mut token = Cep18TokenContractRef::new(self.env(), token_address);

        if token.balance_of(from) < amount || token.allowance(from, this) < amount {
            self.env().revert(WrapperError::TransferFailed);
        }
        if !token.transfer_from(from, this, amount) {
            self.env().revert(WrapperError::TransferFailed);
        }
    }

    /// Push tokens held by the wrapper to `to` (sweep flow)
    pub(super) fn push_tokens(&self, token_address: Address, to: Address, amount: U256) {
        let mut token = Cep18TokenContractRef::new(self.env(), token_address);
        if !token.transfer(to, amount) {
            self.env().revert(WrapperError::TransferFailed);
        }
    }

    /// Set the wrapper's allowance for `spender` to the maximum value
    pub(super) fn approve_max(&self, token_address: Address, spender: Address) {
        let mut token = Cep18TokenContractRef::new(self.env(), token_address);
        if !token.approve(spender, U256::MAX) {
            self.env().revert(WrapperError::ApprovalFailed);
        }
    }

    /// Token balance held by the wrapper
    pub(super) fn own_balance(&self, token_address: Address) -> U256 {
        let this = self.env().self_address();
        Cep18TokenContractRef::new(self.env(), token_address).balance_of(this)
    }
}
