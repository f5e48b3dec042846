//! Metadata uploader
//!
//! Serializes an [`AgentMetadata`] record to JSON and stores it through a
//! [`BlobStore`], returning the content identifier. Invoked before
//! on-chain minting; the Cid conventionally becomes the record's `image`
//! field.

use air_metadata::AgentMetadata;

use crate::cid::Cid;
use crate::store::{BlobStore, StoreError};

/// Client for pushing metadata records into a content-addressed store.
#[derive(Debug)]
pub struct MetadataUploader<S> {
    store: S,
}

impl<S: BlobStore> MetadataUploader<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize and store one metadata record.
    ///
    /// Store failures propagate unmodified; there is no retry here.
    pub async fn upload(&self, metadata: &AgentMetadata) -> Result<Cid, StoreError> {
        let bytes = serde_json::to_vec(metadata)?;
        let cid = self.store.put(&bytes).await?;
        tracing::debug!(name = %metadata.name, cid = %cid.short(), "metadata uploaded");
        Ok(cid)
    }

    /// Fetch and decode a previously uploaded record.
    pub async fn fetch(&self, cid: &Cid) -> Result<AgentMetadata, StoreError> {
        let bytes = self.store.get(cid).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
