//! Deployment configuration read from the environment (`.env`).
//!
//! Node connection settings are the `ODRA_CASPER_LIVENET_*` variables the
//! livenet environment reads itself; everything here is wrapper specific.

use std::str::FromStr;

use odra::prelude::Address;
use save_wrapper_contracts::types::StakerOfRecord;
use thiserror::Error;

pub const PAYMENT_AMOUNT: &str = "ODRA_CASPER_LIVENET_PAYMENT_AMOUNT";
pub const VAULT: &str = "SAVE_WRAPPER_VAULT";
pub const STAKER_OF_RECORD: &str = "SAVE_WRAPPER_STAKER_OF_RECORD";
pub const ACCOUNTING_TOKEN: &str = "SAVE_WRAPPER_ACCOUNTING_TOKEN";
pub const DEFAULT_REFERRER: &str = "SAVE_WRAPPER_DEFAULT_REFERRER";
pub const GUARD_DEPOSITS: &str = "SAVE_WRAPPER_GUARD_DEPOSITS";
pub const MASSET: &str = "SAVE_WRAPPER_MASSET";
pub const SAVE: &str = "SAVE_WRAPPER_SAVE";
pub const BASSETS: &str = "SAVE_WRAPPER_BASSETS";
pub const FEEDER_POOLS: &str = "SAVE_WRAPPER_FEEDER_POOLS";
pub const FEEDER_ASSETS: &str = "SAVE_WRAPPER_FEEDER_ASSETS";

const DEFAULT_PAYMENT_AMOUNT: u64 = 200_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),
    #[error("{key} is not a valid address: {value}")]
    InvalidAddress { key: &'static str, value: String },
    #[error("{key} must be `caller` or `wrapper`, got {value}")]
    InvalidStakerOfRecord { key: &'static str, value: String },
    #[error("{key} must be a boolean, got {value}")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} must be an unsigned integer, got {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("SAVE_WRAPPER_FEEDER_POOLS lists {pools} entries but SAVE_WRAPPER_FEEDER_ASSETS lists {assets}")]
    FeederLengthMismatch { pools: usize, assets: usize },
}

/// Allowances granted right after deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub masset: Address,
    pub save: Address,
    pub bassets: Vec<Address>,
    pub feeder_pools: Vec<Address>,
    pub feeder_assets: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub payment_amount: u64,
    pub vault: Address,
    pub staker_of_record: StakerOfRecord,
    pub accounting_token: Option<Address>,
    pub default_referrer: Option<Address>,
    pub guard_deposits: bool,
    /// Present when both `SAVE_WRAPPER_MASSET` and `SAVE_WRAPPER_SAVE` are set
    pub bundle: Option<BundleConfig>,
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let payment_amount = match get(PAYMENT_AMOUNT) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                key: PAYMENT_AMOUNT,
                value,
            })?,
            None => DEFAULT_PAYMENT_AMOUNT,
        };

        let vault = parse_address(VAULT, &get(VAULT).ok_or(ConfigError::Missing(VAULT))?)?;

        let staker_of_record = match get(STAKER_OF_RECORD) {
            Some(value) => parse_staker_of_record(&value)?,
            None => StakerOfRecord::Caller,
        };

        let guard_deposits = match get(GUARD_DEPOSITS) {
            Some(value) => parse_bool(GUARD_DEPOSITS, &value)?,
            None => true,
        };

        let bundle = match (get(MASSET), get(SAVE)) {
            (Some(masset), Some(save)) => {
                let feeder_pools = parse_list(FEEDER_POOLS, get(FEEDER_POOLS))?;
                let feeder_assets = parse_list(FEEDER_ASSETS, get(FEEDER_ASSETS))?;
                if feeder_pools.len() != feeder_assets.len() {
                    return Err(ConfigError::FeederLengthMismatch {
                        pools: feeder_pools.len(),
                        assets: feeder_assets.len(),
                    });
                }
                Some(BundleConfig {
                    masset: parse_address(MASSET, &masset)?,
                    save: parse_address(SAVE, &save)?,
                    bassets: parse_list(BASSETS, get(BASSETS))?,
                    feeder_pools,
                    feeder_assets,
                })
            }
            _ => None,
        };

        Ok(Self {
            payment_amount,
            vault,
            staker_of_record,
            accounting_token: parse_optional(ACCOUNTING_TOKEN, get(ACCOUNTING_TOKEN))?,
            default_referrer: parse_optional(DEFAULT_REFERRER, get(DEFAULT_REFERRER))?,
            guard_deposits,
            bundle,
        })
    }
}

fn parse_address(key: &'static str, value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value).map_err(|_| ConfigError::InvalidAddress {
        key,
        value: value.to_string(),
    })
}

fn parse_optional(key: &'static str, value: Option<String>) -> Result<Option<Address>, ConfigError> {
    value.map(|v| parse_address(key, &v)).transpose()
}

/// Comma separated addresses; unset means empty
fn parse_list(key: &'static str, value: Option<String>) -> Result<Vec<Address>, ConfigError> {
    match value {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| parse_address(key, item))
            .collect(),
        None => Ok(Vec::new()),
    }
}

fn parse_staker_of_record(value: &str) -> Result<StakerOfRecord, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "caller" => Ok(StakerOfRecord::Caller),
        "wrapper" => Ok(StakerOfRecord::Wrapper),
        _ => Err(ConfigError::InvalidStakerOfRecord {
            key: STAKER_OF_RECORD,
            value: value.to_string(),
        }),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
