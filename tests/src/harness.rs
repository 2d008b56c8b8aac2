//! Shared deployment for the integration tests.
//!
//! Rates used throughout:
//! - minter: 1000 bAsset → 995 mAsset
//! - savings: 995 mAsset → 796 credits
//! - feeder pool (optional): 1000 fAsset → 990 mAsset
//! - vault: 500 credits → 600 of the output asset

use odra::casper_types::account::AccountHash;
use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;
use save_wrapper_contracts::save_wrapper::{SaveWrapper, SaveWrapperHostRef, SaveWrapperInitArgs};
use save_wrapper_contracts::types::StakerOfRecord;

use crate::mocks::*;

pub const INITIAL_BALANCE: u64 = 1_000_000;
pub const MINT_RATE_BPS: u32 = 9_950;
pub const CREDITS_BPS: u32 = 8_000;
pub const SWAP_RATE_BPS: u32 = 9_900;
pub const PAYOUT_BPS: u32 = 12_000;

pub fn zero_address() -> Address {
    Address::Account(AccountHash::default())
}

pub fn u(value: u64) -> U256 {
    U256::from(value)
}

pub fn addr<R: HostRef>(contract: &R) -> Address {
    contract.address().clone()
}

/// OdraVM derives contract addresses from a deployment counter without
/// padding, so the tenth contract in one env aliases the first.
pub const MAX_DEPLOYMENTS: usize = 9;

/// Wrapper construction options
#[derive(Clone, Copy)]
pub struct Options {
    pub staker_of_record: StakerOfRecord,
    pub guard_deposits: bool,
    pub default_referrer: bool,
    /// Deploy a feeder pool and its fAsset
    pub feeder: bool,
    /// Deploy a platform token apart from the reward token
    pub separate_platform_token: bool,
}

impl Options {
    pub fn caller() -> Self {
        Self {
            staker_of_record: StakerOfRecord::Caller,
            guard_deposits: false,
            default_referrer: false,
            feeder: false,
            separate_platform_token: false,
        }
    }

    pub fn wrapper() -> Self {
        Self {
            staker_of_record: StakerOfRecord::Wrapper,
            guard_deposits: true,
            ..Self::caller()
        }
    }

    pub fn guarded(mut self, guard_deposits: bool) -> Self {
        self.guard_deposits = guard_deposits;
        self
    }

    pub fn with_default_referrer(mut self) -> Self {
        self.default_referrer = true;
        self
    }

    pub fn with_feeder(mut self) -> Self {
        self.feeder = true;
        self
    }

    pub fn with_separate_platform_token(mut self) -> Self {
        self.separate_platform_token = true;
        self
    }

    /// Contracts `Fixture::new` deploys for these options
    pub fn deployments(&self) -> usize {
        let mut count = 5; // bAsset, reward, mAsset, savings, vault
        if self.feeder {
            count += 2;
        }
        if self.separate_platform_token {
            count += 1;
        }
        if self.staker_of_record == StakerOfRecord::Wrapper {
            count += 1;
        }
        count + 1 // wrapper
    }
}

/// Feeder pool and the fAsset it swaps
pub struct Feeder {
    pub pool: MockFeederPoolHostRef,
    pub asset: MockTokenHostRef,
}

pub struct Fixture {
    pub env: HostEnv,
    pub owner: Address,
    pub user: Address,
    pub stranger: Address,
    pub referrer: Address,
    pub basset: MockTokenHostRef,
    pub reward: MockTokenHostRef,
    /// Same contract as `reward` unless a separate one was requested
    pub platform: MockTokenHostRef,
    pub masset: MockMassetHostRef,
    pub savings: MockSavingsHostRef,
    pub feeder: Option<Feeder>,
    pub vault: MockVaultHostRef,
    pub accounting: Option<MockAccountingTokenHostRef>,
    pub wrapper: SaveWrapperHostRef,
}

impl Fixture {
    /// Deploys the collaborators the options ask for and the wrapper, grants
    /// the approval bundle and funds `user` with approvals to the wrapper.
    pub fn new(options: Options) -> Self {
        assert!(
            options.deployments() <= MAX_DEPLOYMENTS,
            "fixture would deploy {} contracts",
            options.deployments()
        );
        let env = odra_test::env();
        let owner = env.get_account(0);
        let user = env.get_account(1);
        let stranger = env.get_account(2);
        let referrer = env.get_account(3);
        env.set_caller(owner);

        let mut basset = token(&env, "bUSD");
        let reward = token(&env, "RWD");
        let platform = if options.separate_platform_token {
            token(&env, "PLT")
        } else {
            MockTokenHostRef::new(addr(&reward), env.clone())
        };

        let mut masset = MockMasset::deploy(&env, MockMassetInitArgs { rate_bps: MINT_RATE_BPS });
        let savings = MockSavings::deploy(
            &env,
            MockSavingsInitArgs {
                underlying: addr(&masset),
                credits_bps: CREDITS_BPS,
            },
        );
        let vault = MockVault::deploy(
            &env,
            MockVaultInitArgs {
                staking_token: addr(&savings),
                reward_token: addr(&reward),
                platform_token: addr(&platform),
                payout_bps: PAYOUT_BPS,
            },
        );
        let mut feeder = options.feeder.then(|| Feeder {
            asset: token(&env, "fUSD"),
            pool: MockFeederPool::deploy(&env, MockFeederPoolInitArgs { rate_bps: SWAP_RATE_BPS }),
        });

        // Liquidity for swaps and payouts
        basset.mint(addr(&vault), u(INITIAL_BALANCE));
        if let Some(feeder) = &feeder {
            masset.issue(addr(&feeder.pool), u(INITIAL_BALANCE));
        }

        let mut accounting = match options.staker_of_record {
            StakerOfRecord::Wrapper => Some(MockAccountingToken::deploy(
                &env,
                MockAccountingTokenInitArgs {
                    symbol: "imUSD-v".to_string(),
                },
            )),
            StakerOfRecord::Caller => None,
        };

        let mut wrapper = SaveWrapper::deploy(
            &env,
            SaveWrapperInitArgs {
                vault: addr(&vault),
                staker_of_record: options.staker_of_record,
                accounting_token: accounting.as_ref().map(addr),
                default_referrer: if options.default_referrer { Some(referrer) } else { None },
                guard_deposits: options.guard_deposits,
            },
        );

        if let Some(accounting) = accounting.as_mut() {
            accounting.set_minter(addr(&wrapper));
        }

        let (feeder_pools, feeder_assets) = match &feeder {
            Some(feeder) => (vec![addr(&feeder.pool)], vec![addr(&feeder.asset)]),
            None => (vec![], vec![]),
        };
        wrapper.approve_bundle(
            addr(&masset),
            addr(&savings),
            addr(&vault),
            vec![addr(&basset)],
            feeder_pools,
            feeder_assets,
        );

        basset.mint(user, u(INITIAL_BALANCE));
        masset.issue(user, u(INITIAL_BALANCE));
        if let Some(feeder) = feeder.as_mut() {
            feeder.asset.mint(user, u(INITIAL_BALANCE));
        }

        env.set_caller(user);
        basset.approve(addr(&wrapper), U256::MAX);
        masset.approve(addr(&wrapper), U256::MAX);
        if let Some(feeder) = feeder.as_mut() {
            feeder.asset.approve(addr(&wrapper), U256::MAX);
        }
        if let Some(accounting) = accounting.as_mut() {
            accounting.approve(addr(&wrapper), U256::MAX);
        }
        env.set_caller(owner);

        Self {
            env,
            owner,
            user,
            stranger,
            referrer,
            basset,
            reward,
            platform,
            masset,
            savings,
            feeder,
            vault,
            accounting,
            wrapper,
        }
    }

    /// Panics unless built with `Options::with_feeder`
    pub fn feeder(&mut self) -> &mut Feeder {
        self.feeder.as_mut().expect("fixture built without a feeder pool")
    }

    /// Every contract the fixture deployed, wrapper last
    pub fn contract_addresses(&self) -> Vec<Address> {
        let mut addresses = vec![addr(&self.basset), addr(&self.reward)];
        if addr(&self.platform) != addr(&self.reward) {
            addresses.push(addr(&self.platform));
        }
        addresses.extend([addr(&self.masset), addr(&self.savings), addr(&self.vault)]);
        if let Some(feeder) = &self.feeder {
            addresses.extend([addr(&feeder.asset), addr(&feeder.pool)]);
        }
        if let Some(accounting) = &self.accounting {
            addresses.push(addr(accounting));
        }
        addresses.push(addr(&self.wrapper));
        addresses
    }

    pub fn as_owner(&self) {
        self.env.set_caller(self.owner);
    }

    pub fn as_user(&self) {
        self.env.set_caller(self.user);
    }

    pub fn as_stranger(&self) {
        self.env.set_caller(self.stranger);
    }

    /// Deposits `amount` bAsset for `user` through the mint path
    pub fn save_via_mint(&mut self, amount: u64, min_out: u64, stake: bool) {
        self.as_user();
        let (masset, savings, vault, basset) = self.deposit_targets();
        self.wrapper
            .save_via_mint(masset, savings, vault, basset, u(amount), u(min_out), stake);
    }

    /// `(masset, savings, vault, basset)`
    pub fn deposit_targets(&self) -> (Address, Address, Address, Address) {
        (addr(&self.masset), addr(&self.savings), addr(&self.vault), addr(&self.basset))
    }

    pub fn accounting_balance(&self, account: Address) -> U256 {
        match &self.accounting {
            Some(accounting) => accounting.balance_of(account),
            None => U256::zero(),
        }
    }
}

pub fn token(env: &HostEnv, symbol: &str) -> MockTokenHostRef {
    MockToken::deploy(
        env,
        MockTokenInitArgs {
            symbol: symbol.to_string(),
        },
    )
}
