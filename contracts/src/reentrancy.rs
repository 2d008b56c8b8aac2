//! Reentrancy guard
//!
//! A single lock around the value-moving pipelines. A revert discards the
//! lock write together with every other write of the call, so the lock is
//! never observed held once control is back with an external caller.

use odra::prelude::*;
use crate::errors::WrapperError;

#[odra::module]
pub struct ReentrancyGuard {
    locked: Var<bool>,
}

#[odra::module]
impl ReentrancyGuard {
    pub fn is_locked(&self) -> bool {
        self.locked.get().unwrap_or(false)
    }

    /// Take the lock, reverting if it is already held
    pub fn enter(&mut self) {
        if self.is_locked() {
            self.env().revert(WrapperError::ReentrantCall);
        }
        self.locked.set(true);
    }

    pub fn exit(&mut self) {
        self.locked.set(false);
    }
}
