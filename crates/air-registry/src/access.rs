//! Owner and verified-user access checks
//!
//! The contract owner is set during initialization and may later be
//! reassigned. Verified users form an explicit allow-list consulted by the
//! verification-gated mint policy; identities are unverified by default.

use std::collections::HashSet;

use crate::error::RegistryError;
use crate::types::Identity;

#[derive(Debug, Default)]
pub struct AccessController {
    owner: Option<Identity>,
    verified: HashSet<Identity>,
}

impl AccessController {
    pub(crate) fn set_owner(&mut self, owner: Identity) {
        self.owner = Some(owner);
    }

    #[inline]
    #[must_use]
    pub fn owner(&self) -> Option<Identity> {
        self.owner
    }

    #[inline]
    #[must_use]
    pub fn is_owner(&self, caller: Identity) -> bool {
        self.owner == Some(caller)
    }

    /// Add `identity` to the verified-user set. Owner-only; adding an
    /// already-verified identity is a no-op success.
    pub fn set_verified_user(
        &mut self,
        caller: Identity,
        identity: Identity,
    ) -> Result<(), RegistryError> {
        if !self.is_owner(caller) {
            return Err(RegistryError::Unauthorized { caller });
        }
        self.verified.insert(identity);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_verified(&self, identity: Identity) -> bool {
        self.verified.contains(&identity)
    }

    /// Passes iff `caller` is the contract owner or the current holder of
    /// the token under mutation.
    pub fn require_owner_or_holder(
        &self,
        caller: Identity,
        holder: Identity,
    ) -> Result<(), RegistryError> {
        if self.is_owner(caller) || caller == holder {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized { caller })
        }
    }
}
