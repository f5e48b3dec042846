//! Testing utilities for the AIR workspace
//!
//! Shared fixtures and setup helpers.

#![allow(missing_docs)]

use air_metadata::{AgentMetadata, MetadataUpdate};
use air_registry::{Identity, MintPolicy, RegistryConfig, RegistryHandle};
use air_storage::{MemoryBlobStore, MetadataUploader};

/// The metadata record used by the original mint round-trip scenario.
pub fn sample_metadata() -> AgentMetadata {
    AgentMetadata::new(
        "AI Agent 1",
        "Description of AI Agent 1",
        "https://example.com/image.png",
        vec!["skill1".to_string(), "skill2".to_string()],
        "1.0.0",
    )
}

pub fn sample_metadata_named(name: &str) -> AgentMetadata {
    let mut metadata = sample_metadata();
    metadata.name = name.to_string();
    metadata
}

/// The wholesale update used by the original update scenario.
pub fn sample_update() -> MetadataUpdate {
    MetadataUpdate::new(
        "Updated description",
        "https://example.com/updated-image.png",
        vec!["new-skill1".to_string()],
        "1.1.0",
    )
}

/// An initialized open-mint registry plus its contract owner.
pub fn initialized_registry() -> (RegistryHandle, Identity) {
    let registry = RegistryHandle::new();
    let deployer = Identity::new();
    registry.initialize(deployer).unwrap();
    (registry, deployer)
}

/// An initialized verification-gated registry plus its contract owner.
pub fn verified_registry() -> (RegistryHandle, Identity) {
    let registry = RegistryHandle::with_config(RegistryConfig {
        mint_policy: MintPolicy::VerifiedOnly,
    });
    let deployer = Identity::new();
    registry.initialize(deployer).unwrap();
    (registry, deployer)
}

/// An uploader backed by a fresh in-memory blob store.
pub fn memory_uploader() -> MetadataUploader<MemoryBlobStore> {
    MetadataUploader::new(MemoryBlobStore::new())
}
