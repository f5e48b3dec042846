//! AIR Metadata Records
//!
//! Value objects describing an AI agent token: [`AgentMetadata`] is the
//! per-token record, [`MetadataUpdate`] the replacement payload for its
//! mutable fields.
//!
//! # Example
//!
//! ```
//! use air_metadata::{AgentMetadata, MetadataUpdate};
//!
//! let mut record = AgentMetadata::new(
//!     "AI Agent 1",
//!     "Description of AI Agent 1",
//!     "https://example.com/image.png",
//!     vec!["skill1".into(), "skill2".into()],
//!     "1.0.0",
//! );
//!
//! record.apply(MetadataUpdate::new(
//!     "Updated description",
//!     "https://example.com/updated-image.png",
//!     vec!["new-skill1".into()],
//!     "1.1.0",
//! ));
//!
//! assert_eq!(record.name, "AI Agent 1");
//! assert_eq!(record.capabilities, vec!["new-skill1".to_string()]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod record;

pub use record::{AgentMetadata, MetadataUpdate};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
