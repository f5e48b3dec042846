//! Event log guarantees: hash chain integrity and mutate-implies-emit

use air_registry::{EventKind, Identity, RegistryError};
use air_test_utils::{initialized_registry, sample_metadata, sample_update};

#[test]
fn log_chain_verifies_after_full_lifecycle() {
    let (registry, _deployer) = initialized_registry();
    let holder = Identity::new();
    let buyer = Identity::new();

    let id = registry
        .mint_agent(holder, holder, sample_metadata())
        .unwrap();
    registry.update_metadata(holder, id, sample_update()).unwrap();
    registry.transfer_position(holder, id, buyer).unwrap();
    registry.burn(buyer, id).unwrap();

    assert!(registry.log_integrity().is_ok());

    // Each entry links to its predecessor
    let events = registry.events();
    for pair in events.windows(2) {
        assert_eq!(pair[1].prev_hash, pair[0].hash);
    }
}

#[test]
fn every_mutation_appends_events() {
    let (registry, _deployer) = initialized_registry();
    let holder = Identity::new();
    let buyer = Identity::new();

    // initialize emitted the ownership event
    let mut expected = 1;
    assert_eq!(registry.events().len(), expected);

    let id = registry
        .mint_agent(holder, holder, sample_metadata())
        .unwrap();
    expected += 2; // Transfer + TokenMinted
    assert_eq!(registry.events().len(), expected);

    registry.update_metadata(holder, id, sample_update()).unwrap();
    expected += 1;
    assert_eq!(registry.events().len(), expected);

    registry.transfer_position(holder, id, buyer).unwrap();
    expected += 2; // PositionTransferred + Transfer
    assert_eq!(registry.events().len(), expected);

    registry.burn(buyer, id).unwrap();
    expected += 1;
    assert_eq!(registry.events().len(), expected);
}

#[test]
fn failed_operations_emit_nothing() {
    let (registry, _deployer) = initialized_registry();
    let holder = Identity::new();
    let outsider = Identity::new();
    let id = registry
        .mint_agent(holder, holder, sample_metadata())
        .unwrap();
    let before = registry.events().len();

    let _ = registry.update_metadata(outsider, id, sample_update());
    let _ = registry.transfer_position(holder, id, Identity::NULL);
    let _ = registry.burn(outsider, id);
    assert_eq!(registry.initialize(holder), Err(RegistryError::AlreadyInitialized));

    assert_eq!(registry.events().len(), before);
    assert!(registry.log_integrity().is_ok());
}

#[test]
fn initialization_emits_ownership_from_null() {
    let (registry, deployer) = initialized_registry();

    let events = registry.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0].kind,
        EventKind::OwnershipTransferred { previous_owner, new_owner }
            if previous_owner.is_null() && *new_owner == deployer
    ));
}

#[test]
fn event_order_matches_mutation_order() {
    let (registry, _deployer) = initialized_registry();
    let holder = Identity::new();

    let id0 = registry
        .mint_agent(holder, holder, sample_metadata())
        .unwrap();
    let id1 = registry
        .mint_agent(holder, holder, sample_metadata())
        .unwrap();
    registry.burn(holder, id0).unwrap();

    let kinds: Vec<_> = registry
        .events()
        .into_iter()
        .map(|e| e.kind)
        .collect();

    // Ownership, then mint 0 (2 events), mint 1 (2 events), burn 0
    assert_eq!(kinds.len(), 6);
    assert!(matches!(kinds[0], EventKind::OwnershipTransferred { .. }));
    assert!(matches!(kinds[1], EventKind::Transfer { id, .. } if id == id0));
    assert!(matches!(kinds[2], EventKind::TokenMinted { id, .. } if id == id0));
    assert!(matches!(kinds[3], EventKind::Transfer { id, .. } if id == id1));
    assert!(matches!(kinds[4], EventKind::TokenMinted { id, .. } if id == id1));
    assert!(matches!(
        kinds[5],
        EventKind::Transfer { id, to, .. } if id == id0 && to.is_null()
    ));
}
