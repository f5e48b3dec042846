use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use air_metadata::AgentMetadata;

/// Token identifier, assigned by the registry in strictly increasing order
/// starting at 0 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a caller or token holder.
///
/// [`Identity::NULL`] is the sentinel endpoint of mint/burn `Transfer`
/// events and is never a valid holder or transfer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub Uuid);

impl Identity {
    /// The null identity sentinel
    pub const NULL: Self = Self(Uuid::nil());

    /// Generate a fresh random identity
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who may receive a mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintPolicy {
    /// Any non-null identity may receive a mint
    Open,
    /// Mint targets must be on the verified-user allow-list
    VerifiedOnly,
}

/// Registry configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub mint_policy: MintPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mint_policy: MintPolicy::Open,
        }
    }
}

/// Read-only view of a live token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub id: TokenId,
    pub owner: Identity,
    pub metadata: AgentMetadata,
}

/// Registry counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total ids ever allocated (equals the next id to assign)
    pub minted: u64,
    /// Currently live tokens
    pub live: usize,
    /// Permanently burned tokens
    pub burned: usize,
}

/// Seconds since the Unix epoch
pub(crate) fn now_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_identity_is_null() {
        assert!(Identity::NULL.is_null());
        assert!(!Identity::new().is_null());
    }

    #[test]
    fn identities_are_distinct() {
        assert_ne!(Identity::new(), Identity::new());
    }

    #[test]
    fn token_id_display() {
        assert_eq!(TokenId(42).to_string(), "42");
    }

    #[test]
    fn default_config_is_open_mint() {
        assert_eq!(RegistryConfig::default().mint_policy, MintPolicy::Open);
    }
}
