//! Access guard
//!
//! Owner check and emergency pause switch shared by every wrapper entry
//! point. The owner is fixed at initialization and has no transfer path.

use odra::prelude::*;
use crate::errors::WrapperError;

#[odra::module]
pub struct AccessGuard {
    /// Set once to the deployer
    owner: Var<Address>,
    /// Emergency stop
    paused: Var<bool>,
}

#[odra::module]
impl AccessGuard {
    /// Initialize with the given owner, unpaused
    pub fn init(&mut self, owner: Address) {
        if self.owner.get().is_some() {
            self.env().revert(WrapperError::InvalidConfig);
        }
        self.owner.set(owner);
        self.paused.set(false);
    }

    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get().unwrap_or(false)
    }

    /// Revert unless the caller is the owner
    pub fn require_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(WrapperError::Unauthorized);
        }
    }

    /// Revert while paused
    pub fn require_active(&self) {
        if self.is_paused() {
            self.env().revert(WrapperError::Paused);
        }
    }

    /// Flip the pause flag (owner only), returning the new value
    pub fn toggle(&mut self) -> bool {
        self.require_owner();
        let paused = !self.is_paused();
        self.paused.set(paused);
        paused
    }
}
