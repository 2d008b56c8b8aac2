//! Common types used across the save wrapper.

use odra::prelude::*;
use odra::casper_types::bytesrepr::ToBytes;
use crate::errors::WrapperError;

/// Who the rewards vault records as the owner of staked credits
#[odra::odra_type]
#[derive(Copy)]
pub enum StakerOfRecord {
    /// Credits are staked on behalf of the depositing account
    Caller,
    /// Credits are staked on behalf of the wrapper, and the depositor
    /// receives accounting tokens as the receipt
    Wrapper,
}

impl StakerOfRecord {
    /// Staking for the wrapper needs an accounting token to know who may
    /// withdraw; staking for the caller must not mint one.
    pub fn validate_custody(&self, accounting_token: Option<Address>) -> Result<(), WrapperError> {
        match (self, accounting_token) {
            (StakerOfRecord::Caller, None) => Ok(()),
            (StakerOfRecord::Wrapper, Some(token)) if !is_zero_address(&token) => Ok(()),
            _ => Err(WrapperError::InvalidConfig),
        }
    }
}

/// The four ways deposited savings can be routed
#[odra::odra_type]
#[derive(Copy)]
pub enum DepositRoute {
    StakeWithReferrer,
    Stake,
    SaveWithReferrer,
    Save,
}

impl DepositRoute {
    pub fn select(stake: bool, has_referrer: bool) -> Self {
        match (stake, has_referrer) {
            (true, true) => DepositRoute::StakeWithReferrer,
            (true, false) => DepositRoute::Stake,
            (false, true) => DepositRoute::SaveWithReferrer,
            (false, false) => DepositRoute::Save,
        }
    }

    pub fn stakes(&self) -> bool {
        matches!(self, DepositRoute::StakeWithReferrer | DepositRoute::Stake)
    }
}

/// Canonical approval set needed before any pipeline can run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalBundle {
    /// Minter, which is also the derivative asset
    pub masset: Address,
    /// Savings wrapper, which is also the credits token
    pub save: Address,
    /// Rewards vault
    pub vault: Address,
    /// Base assets the minter pulls
    pub bassets: Vec<Address>,
    pub feeder_pools: Vec<Address>,
    pub feeder_assets: Vec<Address>,
}

/// A request to grant unlimited allowance from the wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalRequest {
    Single { token: Address, spender: Address },
    Many { tokens: Vec<Address>, spender: Address },
    Bundle(ApprovalBundle),
}

impl ApprovalRequest {
    /// Expands the request into elementary `(token, spender)` grants.
    ///
    /// Fails without producing any grant when the bundle lists are uneven
    /// or any pair holds a zero address.
    pub fn grants(&self) -> Result<Vec<(Address, Address)>, WrapperError> {
        let grants = match self {
            ApprovalRequest::Single { token, spender } => {
                let mut grants = Vec::new();
                grants.push((*token, *spender));
                grants
            }
            ApprovalRequest::Many { tokens, spender } => {
                tokens.iter().map(|token| (*token, *spender)).collect()
            }
            ApprovalRequest::Bundle(bundle) => {
                if bundle.feeder_pools.len() != bundle.feeder_assets.len() {
                    return Err(WrapperError::LengthMismatch);
                }
                let mut grants = Vec::new();
                grants.push((bundle.masset, bundle.save));
                grants.push((bundle.save, bundle.vault));
                grants.extend(bundle.bassets.iter().map(|basset| (*basset, bundle.masset)));
                grants.extend(
                    bundle
                        .feeder_assets
                        .iter()
                        .zip(bundle.feeder_pools.iter())
                        .map(|(fasset, fpool)| (*fasset, *fpool)),
                );
                grants
            }
        };

        for (token, spender) in grants.iter() {
            validate_grant(token, spender)?;
        }
        Ok(grants)
    }
}

/// Spender is checked before token.
pub fn validate_grant(token: &Address, spender: &Address) -> Result<(), WrapperError> {
    if is_zero_address(spender) {
        return Err(WrapperError::InvalidSpender);
    }
    if is_zero_address(token) {
        return Err(WrapperError::InvalidToken);
    }
    Ok(())
}

/// True when every hash byte of the address is zero, for accounts and contracts alike.
pub fn is_zero_address(address: &Address) -> bool {
    match address.to_bytes() {
        Ok(bytes) => bytes.iter().skip(1).all(|byte| *byte == 0),
        Err(_) => true,
    }
}

/// Treats a zero referrer the same as no referrer.
pub fn normalize_referrer(referrer: Option<Address>) -> Option<Address> {
    referrer.filter(|address| !is_zero_address(address))
}
