//! Lifecycle event log
//!
//! The log is the sole observation channel for external indexers: every
//! state mutation appends exactly the events that describe it, in mutation
//! order. Entries are chained with SHA-256 so tampering or reordering is
//! detectable after the fact.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use air_metadata::{AgentMetadata, MetadataUpdate};

use crate::types::{now_timestamp, EventId, Identity, TokenId};

/// Payload of one lifecycle event.
///
/// Mint and burn are modeled as `Transfer`s from/to [`Identity::NULL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A token was minted; carries the full metadata record
    TokenMinted {
        id: TokenId,
        owner: Identity,
        metadata: AgentMetadata,
    },
    /// A token's mutable metadata was replaced
    MetadataUpdated { id: TokenId, update: MetadataUpdate },
    /// The domain-level transfer of a token position
    PositionTransferred {
        id: TokenId,
        previous_owner: Identity,
        new_owner: Identity,
    },
    /// Generic holder change; NULL endpoints encode mint and burn
    Transfer {
        from: Identity,
        to: Identity,
        id: TokenId,
    },
    /// Contract ownership was established or reassigned
    OwnershipTransferred {
        previous_owner: Identity,
        new_owner: Identity,
    },
}

impl EventKind {
    /// The token this event concerns, if any.
    #[must_use]
    pub fn token_id(&self) -> Option<TokenId> {
        match self {
            Self::TokenMinted { id, .. }
            | Self::MetadataUpdated { id, .. }
            | Self::PositionTransferred { id, .. }
            | Self::Transfer { id, .. } => Some(*id),
            Self::OwnershipTransferred { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub timestamp: u64,
    pub kind: EventKind,
    pub prev_hash: [u8; 32],
    pub hash: [u8; 32],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventLogError {
    #[error("event log integrity violation")]
    IntegrityViolation,
}

/// Append-only, hash-chained event log.
#[derive(Debug, Default)]
pub struct EventLog {
    inner: Mutex<Vec<Event>>,
}

impl EventLog {
    pub fn append(&self, kind: EventKind) -> EventId {
        let mut guard = self.inner.lock();
        let prev_hash = guard.last().map(|e| e.hash).unwrap_or([0u8; 32]);
        let mut event = Event {
            event_id: EventId::new(),
            timestamp: now_timestamp(),
            kind,
            prev_hash,
            hash: [0u8; 32],
        };
        event.hash = compute_hash(&event);
        let id = event.event_id;
        guard.push(event);
        id
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().clone()
    }

    /// Events concerning one token, in emission order.
    #[must_use]
    pub fn events_for(&self, id: TokenId) -> Vec<Event> {
        self.inner
            .lock()
            .iter()
            .filter(|e| e.kind.token_id() == Some(id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn verify_integrity(&self) -> Result<(), EventLogError> {
        let guard = self.inner.lock();
        let mut prev = [0u8; 32];
        for e in guard.iter() {
            if e.prev_hash != prev {
                return Err(EventLogError::IntegrityViolation);
            }
            if e.hash != compute_hash(e) {
                return Err(EventLogError::IntegrityViolation);
            }
            prev = e.hash;
        }
        Ok(())
    }
}

fn compute_hash(event: &Event) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(event.event_id.0.as_bytes());
    hasher.update(event.timestamp.to_le_bytes());
    hash_kind(&mut hasher, &event.kind);
    hasher.update(event.prev_hash);
    hasher.finalize().into()
}

fn hash_kind(hasher: &mut Sha256, kind: &EventKind) {
    match kind {
        EventKind::TokenMinted {
            id,
            owner,
            metadata,
        } => {
            hasher.update([0]);
            hasher.update(id.0.to_le_bytes());
            hasher.update(owner.0.as_bytes());
            hash_str(hasher, &metadata.name);
            hash_str(hasher, &metadata.description);
            hash_str(hasher, &metadata.image);
            hash_str_list(hasher, &metadata.capabilities);
            hash_str(hasher, &metadata.version);
        }
        EventKind::MetadataUpdated { id, update } => {
            hasher.update([1]);
            hasher.update(id.0.to_le_bytes());
            hash_str(hasher, &update.description);
            hash_str(hasher, &update.image);
            hash_str_list(hasher, &update.capabilities);
            hash_str(hasher, &update.version);
        }
        EventKind::PositionTransferred {
            id,
            previous_owner,
            new_owner,
        } => {
            hasher.update([2]);
            hasher.update(id.0.to_le_bytes());
            hasher.update(previous_owner.0.as_bytes());
            hasher.update(new_owner.0.as_bytes());
        }
        EventKind::Transfer { from, to, id } => {
            hasher.update([3]);
            hasher.update(from.0.as_bytes());
            hasher.update(to.0.as_bytes());
            hasher.update(id.0.to_le_bytes());
        }
        EventKind::OwnershipTransferred {
            previous_owner,
            new_owner,
        } => {
            hasher.update([4]);
            hasher.update(previous_owner.0.as_bytes());
            hasher.update(new_owner.0.as_bytes());
        }
    }
}

fn hash_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_str_list(hasher: &mut Sha256, items: &[String]) {
    hasher.update((items.len() as u64).to_le_bytes());
    for item in items {
        hash_str(hasher, item);
    }
}
