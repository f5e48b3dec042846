//! Blob store trait and the in-memory reference implementation

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::cid::Cid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Metadata could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No blob stored under this Cid
    #[error("blob not found: {0}")]
    NotFound(Cid),

    /// Malformed content identifier
    #[error("invalid content identifier: {0}")]
    InvalidCid(String),

    /// The backing store failed
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A content-addressed blob store.
///
/// `put` returns the Cid of the stored bytes; storing the same bytes twice
/// returns the same Cid.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, bytes: &[u8]) -> Result<Cid, StoreError>;
    async fn get(&self, cid: &Cid) -> Result<Vec<u8>, StoreError>;
}

/// In-memory blob store, used by tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<Cid, Vec<u8>>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, bytes: &[u8]) -> Result<Cid, StoreError> {
        let cid = Cid::compute(bytes);
        self.blobs.write().insert(cid, bytes.to_vec());
        tracing::debug!(cid = %cid.short(), len = bytes.len(), "blob stored");
        Ok(cid)
    }

    async fn get(&self, cid: &Cid) -> Result<Vec<u8>, StoreError> {
        self.blobs
            .read()
            .get(cid)
            .cloned()
            .ok_or(StoreError::NotFound(*cid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryBlobStore::new();
        let cid = store.put(b"blob body").await.unwrap();
        assert_eq!(store.get(&cid).await.unwrap(), b"blob body");
    }

    #[tokio::test]
    async fn identical_blobs_deduplicate() {
        let store = MemoryBlobStore::new();
        let a = store.put(b"same").await.unwrap();
        let b = store.put(b"same").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_missing_blob_fails() {
        let store = MemoryBlobStore::new();
        let cid = Cid::compute(b"never stored");
        let err = store.get(&cid).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(c) if c == cid));
    }
}
