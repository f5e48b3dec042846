//! Upload-then-mint pipeline: the uploader runs before on-chain minting
//! and its content identifier becomes the token's image URI.

use air_metadata::AgentMetadata;
use air_registry::{Identity, RegistryHandle};
use air_storage::{MemoryBlobStore, MetadataUploader};

#[tokio::test]
async fn uploaded_cid_becomes_the_minted_image_uri() {
    let uploader = MetadataUploader::new(MemoryBlobStore::new());
    let draft = AgentMetadata::new(
        "AI Agent 4",
        "Description of AI Agent 4",
        "https://example.com/image4.png",
        vec!["skill1".to_string(), "skill2".to_string()],
        "4.0.0",
    );

    let cid = uploader.upload(&draft).await.unwrap();

    let registry = RegistryHandle::new();
    let deployer = Identity::new();
    registry.initialize(deployer).unwrap();

    let mut on_chain = draft.clone();
    on_chain.image = format!("ipfs://{cid}");
    let id = registry.mint_agent(deployer, deployer, on_chain).unwrap();

    let view = registry.get_token(id).unwrap();
    assert_eq!(view.metadata.image, format!("ipfs://{cid}"));

    // The pinned blob still decodes to the original draft
    let fetched = uploader.fetch(&cid).await.unwrap();
    assert_eq!(fetched, draft);
}

#[tokio::test]
async fn reuploading_after_metadata_change_yields_a_new_cid() {
    let uploader = MetadataUploader::new(MemoryBlobStore::new());
    let mut metadata = AgentMetadata::new(
        "AI Agent 1",
        "Description of AI Agent 1",
        "https://example.com/image.png",
        vec!["skill1".to_string()],
        "1.0.0",
    );

    let first = uploader.upload(&metadata).await.unwrap();
    metadata.version = "1.1.0".to_string();
    let second = uploader.upload(&metadata).await.unwrap();

    assert_ne!(first, second);
}
