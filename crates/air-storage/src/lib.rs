//! AIR Off-chain Metadata Storage
//!
//! The off-chain collaborator of the registry: serializes an agent
//! metadata record and stores it in a content-addressed blob store,
//! returning a [`Cid`]. The caller is expected to feed the Cid back into
//! the record's `image` field before minting; that linkage is by
//! convention, not enforced here.
//!
//! Store failures propagate to the caller unmodified: fail closed, no
//! silent retry.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod cid;
mod store;
mod uploader;

pub use cid::Cid;
pub use store::{BlobStore, MemoryBlobStore, StoreError};
pub use uploader::MetadataUploader;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
