use parking_lot::RwLock;

use air_metadata::{AgentMetadata, MetadataUpdate};

use crate::access::AccessController;
use crate::error::RegistryError;
use crate::events::{Event, EventKind, EventLog, EventLogError};
use crate::lifecycle::Lifecycle;
use crate::registry::TokenRegistry;
use crate::state::TokenState;
use crate::types::{Identity, MintPolicy, RegistryConfig, RegistryStats, TokenId, TokenView};

/// Registry state guarded by the handle's lock
#[derive(Debug, Default)]
struct RegistryState {
    lifecycle: Lifecycle,
    access: AccessController,
    tokens: TokenRegistry,
}

/// Main registry handle implementing the token service façade.
///
/// Every operation validates, mutates, and appends its events before the
/// write guard is released, so each call is atomic and the event log order
/// always matches the state-mutation order. The handle's lock is the
/// serialization boundary when the registry is hosted outside a
/// single-threaded ledger runtime.
#[derive(Debug)]
pub struct RegistryHandle {
    config: RegistryConfig,
    state: RwLock<RegistryState>,
    event_log: EventLog,
}

impl RegistryHandle {
    /// Create a new, uninitialized registry with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new, uninitialized registry with custom configuration
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            state: RwLock::new(RegistryState::default()),
            event_log: EventLog::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// One-shot initialization: records `caller` as contract owner.
    ///
    /// Replaces a constructor so that storage deployed behind an
    /// upgradeable proxy is set up exactly once across code upgrades. A
    /// second call fails with `AlreadyInitialized` and changes nothing.
    pub fn initialize(&self, caller: Identity) -> Result<(), RegistryError> {
        if caller.is_null() {
            return Err(RegistryError::InvalidArgument(
                "initializer must not be the null identity",
            ));
        }
        let mut state = self.state.write();
        state.lifecycle.initialize()?;
        state.access.set_owner(caller);
        self.event_log.append(EventKind::OwnershipTransferred {
            previous_owner: Identity::NULL,
            new_owner: caller,
        });
        tracing::info!(owner = %caller, "registry initialized");
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.read().lifecycle.is_initialized()
    }

    /// The contract owner. Fails with `NotInitialized` before `initialize`.
    pub fn owner(&self) -> Result<Identity, RegistryError> {
        self.state
            .read()
            .access
            .owner()
            .ok_or(RegistryError::NotInitialized)
    }

    /// Reassign the contract owner. Owner-only.
    pub fn transfer_ownership(
        &self,
        caller: Identity,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        if !state.access.is_owner(caller) {
            tracing::warn!(%caller, "ownership transfer denied");
            return Err(RegistryError::Unauthorized { caller });
        }
        if new_owner.is_null() {
            return Err(RegistryError::InvalidArgument(
                "new owner must not be the null identity",
            ));
        }
        state.access.set_owner(new_owner);
        self.event_log.append(EventKind::OwnershipTransferred {
            previous_owner: caller,
            new_owner,
        });
        tracing::info!(previous = %caller, new = %new_owner, "contract ownership transferred");
        Ok(())
    }

    /// Allow-list `identity` as a mint recipient. Owner-only, idempotent.
    pub fn set_verified_user(
        &self,
        caller: Identity,
        identity: Identity,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        state.access.set_verified_user(caller, identity)?;
        tracing::debug!(user = %identity, "identity verified");
        Ok(())
    }

    #[must_use]
    pub fn is_verified(&self, identity: Identity) -> bool {
        self.state.read().access.is_verified(identity)
    }

    /// Mint a new agent token to `to`.
    ///
    /// Under [`MintPolicy::VerifiedOnly`] the target must be on the
    /// verified-user allow-list. Emits a `Transfer` from the null identity
    /// followed by `TokenMinted` with the full record.
    pub fn mint_agent(
        &self,
        caller: Identity,
        to: Identity,
        metadata: AgentMetadata,
    ) -> Result<TokenId, RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        if to.is_null() {
            return Err(RegistryError::InvalidArgument(
                "mint target must not be the null identity",
            ));
        }
        if self.config.mint_policy == MintPolicy::VerifiedOnly && !state.access.is_verified(to) {
            tracing::warn!(target = %to, "mint denied: target not verified");
            return Err(RegistryError::NotVerified(to));
        }

        let id = state.tokens.next_id();
        state.tokens.put(id, to, metadata.clone())?;

        self.event_log.append(EventKind::Transfer {
            from: Identity::NULL,
            to,
            id,
        });
        self.event_log.append(EventKind::TokenMinted {
            id,
            owner: to,
            metadata,
        });
        tracing::debug!(%caller, %id, owner = %to, "agent token minted");
        Ok(id)
    }

    /// Look up a live token. Side-effect-free; fails with `NotFound` for
    /// unminted or burned ids.
    pub fn get_token(&self, id: TokenId) -> Result<TokenView, RegistryError> {
        let state = self.state.read();
        let (owner, record) = state.tokens.get(id)?;
        Ok(TokenView {
            id,
            owner,
            metadata: record.clone(),
        })
    }

    /// Lifecycle state of an id (including `Unminted` and `Burned`).
    #[must_use]
    pub fn token_state(&self, id: TokenId) -> TokenState {
        self.state.read().tokens.state_of(id)
    }

    /// Replace the mutable metadata of a live token wholesale.
    ///
    /// Callable by the contract owner or the current holder. `name` is
    /// left untouched; the capability list is replaced, never merged.
    pub fn update_metadata(
        &self,
        caller: Identity,
        id: TokenId,
        update: MetadataUpdate,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        let holder = state.tokens.holder_of(id)?;
        state.access.require_owner_or_holder(caller, holder)?;

        let (_, record) = state.tokens.get(id)?;
        let mut record = record.clone();
        record.apply(update.clone());
        state.tokens.set_record(id, record)?;

        self.event_log
            .append(EventKind::MetadataUpdated { id, update });
        tracing::debug!(%caller, %id, "metadata updated");
        Ok(())
    }

    /// Transfer a token position to `new_owner`.
    ///
    /// Callable by the contract owner or the current holder. Emits the
    /// domain event `PositionTransferred` plus a generic `Transfer`.
    pub fn transfer_position(
        &self,
        caller: Identity,
        id: TokenId,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        let previous_owner = state.tokens.holder_of(id)?;
        state.access.require_owner_or_holder(caller, previous_owner)?;
        if new_owner.is_null() {
            return Err(RegistryError::InvalidArgument(
                "transfer target must not be the null identity",
            ));
        }

        state.tokens.set_owner(id, new_owner)?;

        self.event_log.append(EventKind::PositionTransferred {
            id,
            previous_owner,
            new_owner,
        });
        self.event_log.append(EventKind::Transfer {
            from: previous_owner,
            to: new_owner,
            id,
        });
        tracing::debug!(%caller, %id, from = %previous_owner, to = %new_owner, "position transferred");
        Ok(())
    }

    /// Burn a live token. Terminal: the id is never reassigned and later
    /// queries fail with `NotFound`.
    ///
    /// Callable by the contract owner or the current holder. Emits a
    /// `Transfer` to the null identity.
    pub fn burn(&self, caller: Identity, id: TokenId) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.lifecycle.ensure_initialized()?;
        let holder = state.tokens.holder_of(id)?;
        state.access.require_owner_or_holder(caller, holder)?;

        let (previous_owner, _) = state.tokens.remove(id)?;

        self.event_log.append(EventKind::Transfer {
            from: previous_owner,
            to: Identity::NULL,
            id,
        });
        tracing::debug!(%caller, %id, "agent token burned");
        Ok(())
    }

    /// Registry counters.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        RegistryStats {
            minted: state.tokens.minted_count(),
            live: state.tokens.live_count(),
            burned: state.tokens.burned_count(),
        }
    }

    /// All events emitted so far, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.event_log.events()
    }

    /// Events concerning one token.
    #[must_use]
    pub fn events_for(&self, id: TokenId) -> Vec<Event> {
        self.event_log.events_for(id)
    }

    /// Walk the event log's hash chain.
    pub fn log_integrity(&self) -> Result<(), EventLogError> {
        self.event_log.verify_integrity()
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new()
    }
}
