//! Token registry storage
//!
//! Exclusive owner of the id -> (holder, record) mapping. Identifiers are
//! allocated strictly increasing from 0 and never reused; burned ids stay
//! permanently non-live.

use std::collections::{HashMap, HashSet};

use air_metadata::AgentMetadata;

use crate::error::RegistryError;
use crate::state::TokenState;
use crate::types::{Identity, TokenId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenEntry {
    holder: Identity,
    record: AgentMetadata,
}

#[derive(Debug, Default)]
pub struct TokenRegistry {
    entries: HashMap<TokenId, TokenEntry>,
    burned: HashSet<TokenId>,
    next_id: u64,
}

impl TokenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next identifier and advance the counter.
    pub fn next_id(&mut self) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a new live entry.
    ///
    /// Fails with `AlreadyExists` if the id is live or burned. Under the
    /// `next_id` allocation discipline this is unreachable; it is surfaced
    /// rather than silently overwriting.
    pub fn put(
        &mut self,
        id: TokenId,
        holder: Identity,
        record: AgentMetadata,
    ) -> Result<(), RegistryError> {
        if self.state_of(id) != TokenState::Unminted {
            return Err(RegistryError::AlreadyExists(id));
        }
        self.entries.insert(id, TokenEntry { holder, record });
        Ok(())
    }

    /// Holder and record of a live id.
    pub fn get(&self, id: TokenId) -> Result<(Identity, &AgentMetadata), RegistryError> {
        self.entries
            .get(&id)
            .map(|e| (e.holder, &e.record))
            .ok_or(RegistryError::NotFound(id))
    }

    /// Current holder of a live id.
    pub fn holder_of(&self, id: TokenId) -> Result<Identity, RegistryError> {
        self.entries
            .get(&id)
            .map(|e| e.holder)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Reassign the holder of a live id.
    pub fn set_owner(&mut self, id: TokenId, new_owner: Identity) -> Result<(), RegistryError> {
        let entry = self.entries.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        entry.holder = new_owner;
        Ok(())
    }

    /// Replace the record of a live id wholesale.
    pub fn set_record(&mut self, id: TokenId, record: AgentMetadata) -> Result<(), RegistryError> {
        let entry = self.entries.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        entry.record = record;
        Ok(())
    }

    /// Delete a live entry, marking the id permanently burned. Returns the
    /// final holder and record.
    pub fn remove(&mut self, id: TokenId) -> Result<(Identity, AgentMetadata), RegistryError> {
        let entry = self.entries.remove(&id).ok_or(RegistryError::NotFound(id))?;
        self.burned.insert(id);
        Ok((entry.holder, entry.record))
    }

    #[must_use]
    pub fn state_of(&self, id: TokenId) -> TokenState {
        if self.entries.contains_key(&id) {
            TokenState::Live
        } else if self.burned.contains(&id) {
            TokenState::Burned
        } else {
            TokenState::Unminted
        }
    }

    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn burned_count(&self) -> usize {
        self.burned.len()
    }

    /// Total ids ever allocated (equals the next id to assign).
    #[inline]
    #[must_use]
    pub fn minted_count(&self) -> u64 {
        self.next_id
    }
}
