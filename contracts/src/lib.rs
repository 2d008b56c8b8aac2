//! Save Wrapper Contracts
//!
//! One-call orchestration over an mStable-style savings stack on Casper.
//!
//! ## Architecture
//!
//! - **SaveWrapper**: Public entry points (deposit, withdraw, approvals, rewards)
//! - **AccessGuard**: Owner and pause flag
//! - **ReentrancyGuard**: Single lock held across value-moving pipelines
//! - **StakeRouter**: Savings deposit and vault staking per custody policy
//!
//! ## Custody policies
//!
//! - `Caller`: credits are staked on behalf of the depositor, no receipt
//! - `Wrapper`: the wrapper stakes for itself and mints a 1:1 accounting
//!   token to the depositor, redeemable through `withdraw_and_unwrap`

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

pub mod types;
pub mod errors;
pub mod events;
pub mod interfaces;

pub mod access_control;
pub mod reentrancy;
pub mod stake_router;
pub mod save_wrapper;
