//! Events emitted by the save wrapper.

use odra::prelude::*;
use odra::casper_types::U256;

#[odra::event]
pub struct ContractActiveToggled {
    pub paused: bool,
    pub by: Address,
}

#[odra::event]
pub struct ApprovalGranted {
    pub token: Address,
    pub spender: Address,
}

#[odra::event]
pub struct Saved {
    pub account: Address,
    pub input_asset: Address,
    pub input_amount: U256,
    pub credits: U256,
    pub staked: bool,
    pub referrer: Option<Address>,
}

#[odra::event]
pub struct Withdrawn {
    pub account: Address,
    pub amount: U256,
    pub output: Address,
    pub output_quantity: U256,
}

#[odra::event]
pub struct RewardsClaimed {
    pub by: Address,
    pub reward_amount: U256,
    pub platform_amount: U256,
}
