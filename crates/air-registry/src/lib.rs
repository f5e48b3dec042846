//! AIR Registry
//!
//! A host-runtime-agnostic registry of non-fungible AI agent tokens.
//! [`RegistryHandle`] is the entry point: it mints, queries, updates,
//! transfers and burns tokens, gates every mutation through ownership and
//! verification checks, and records each state change in a hash-chained
//! event log.
//!
//! The registry is deployed behind storage that outlives its code, so it
//! initializes through a one-shot [`RegistryHandle::initialize`] call
//! instead of a constructor.

pub mod access;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod registry;
pub mod state;
pub mod types;

pub mod handle;

pub use error::RegistryError;
pub use events::{Event, EventKind, EventLog, EventLogError};
pub use handle::RegistryHandle;
pub use state::TokenState;
pub use types::*;
