//! Registry error kinds
//!
//! Every failure aborts its operation with no partial state change; there
//! is no recovery or retry inside the registry.

use crate::types::{Identity, TokenId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// State-mutating or owner-dependent call before `initialize` succeeded
    #[error("registry not initialized")]
    NotInitialized,

    /// Second call to `initialize`
    #[error("registry already initialized")]
    AlreadyInitialized,

    /// Caller is neither the contract owner nor otherwise entitled to act
    #[error("caller is not authorized")]
    Unauthorized { caller: Identity },

    /// Mint target is absent from the verified-user set
    #[error("recipient is not a verified user")]
    NotVerified(Identity),

    /// Token id is not currently live (never minted, or already burned)
    #[error("token ID not found")]
    NotFound(TokenId),

    /// Structurally invalid input
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Defensive invariant check: an allocated id was already live or burned
    #[error("token ID already exists")]
    AlreadyExists(TokenId),
}

impl RegistryError {
    /// Whether resubmitting with different arguments could succeed.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::AlreadyInitialized | Self::AlreadyExists(_)
        )
    }

    /// Whether this error signals a broken internal invariant rather than
    /// bad caller input.
    #[inline]
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
