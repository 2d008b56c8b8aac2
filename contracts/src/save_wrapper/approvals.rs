//! Unlimited-allowance grants from the wrapper to its collaborators.
//!
//! Grants are always `U256::MAX` and idempotent; the pipelines assume they
//! never need topping up.

use odra::prelude::*;
use crate::events::ApprovalGranted;
use crate::types::ApprovalRequest;
use super::SaveWrapper;

impl SaveWrapper {
    /// Validate the whole request, then grant each pair.
    pub(super) fn grant(&mut self, request: ApprovalRequest) {
        let grants = match request.grants() {
            Ok(grants) => grants,
            Err(error) => self.env().revert(error),
        };

        for (token, spender) in grants {
            self.approve_max(token, spender);
            self.env().emit_event(ApprovalGranted { token, spender });
        }
    }
}
