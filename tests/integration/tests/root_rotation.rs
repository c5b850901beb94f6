// Root rotation: registering a commitment never moves the published root,
// proposals keep the root they were created with, and proofs against a
// superseded root are rejected by proposals created after the rotation.

mod common;

use common::GovSystem;
use governance::{VoteChoice, VoteMode};
use soroban_sdk::{testutils::Address as _, Address};
use zkgov_primitives::GovError;

#[test]
fn test_registration_does_not_move_published_root() {
    let sys = GovSystem::new(3);
    let registry = sys.registry_client();
    for secret in [11u32, 22, 33] {
        sys.commit(secret);
    }
    let root3 = sys.publish_root();

    sys.commit(44);
    assert_eq!(registry.commitment_count(), 4);
    assert_eq!(registry.current_root().unwrap().root, root3);
    assert_ne!(registry.computed_root(), root3);

    let root4 = sys.publish_root();
    assert_ne!(root4, root3);
    let record = registry.current_root().unwrap();
    assert_eq!(record.root, root4);
    assert_eq!(record.leaf_count, 4);
}

#[test]
fn test_stale_root_rejected_after_rotation() {
    let sys = GovSystem::new(3);
    let gov = sys.gov_client();
    for secret in [11u32, 22, 33] {
        sys.commit(secret);
    }
    let root3 = sys.publish_root();
    let before = sys.open_proposal(&Address::generate(&sys.env), VoteMode::Private);

    sys.commit(44);
    let root4 = sys.publish_root();
    let after = sys.open_proposal(&Address::generate(&sys.env), VoteMode::Private);
    assert_eq!(gov.get_proposal(&after).eligible_weight, 4);

    // The older proposal keeps its snapshot
    assert_eq!(
        sys.vote_private(before, 44, &root4, VoteChoice::Yes),
        Err(GovError::RootMismatch)
    );
    assert_eq!(sys.vote_private(before, 11, &root3, VoteChoice::Yes), Ok(()));

    // A proof against the superseded root is stale for the newer proposal
    assert_eq!(
        sys.vote_private(after, 22, &root3, VoteChoice::Yes),
        Err(GovError::RootMismatch)
    );
    assert_eq!(sys.vote_private(after, 22, &root4, VoteChoice::Yes), Ok(()));
    assert_eq!(sys.vote_private(after, 44, &root4, VoteChoice::No), Ok(()));
    assert_eq!(gov.get_results(&after), (1, 1, 0, 2));
}

#[test]
fn test_manual_root_update_is_bounded_by_arena() {
    let sys = GovSystem::new(3);
    let registry = sys.registry_client();
    sys.commit(11);
    sys.commit(22);

    let root = registry.computed_root();
    assert_eq!(
        registry.try_update_voter_set_root(&sys.roles.root_updater, &root, &3),
        Err(Ok(GovError::LeafCountExceedsRegistry))
    );
    let stranger = Address::generate(&sys.env);
    assert_eq!(
        registry.try_update_voter_set_root(&stranger, &root, &2),
        Err(Ok(GovError::Unauthorized))
    );

    registry.update_voter_set_root(&sys.roles.root_updater, &root, &2);
    assert_eq!(registry.current_root().unwrap().leaf_count, 2);
}

#[test]
fn test_new_epoch_requires_new_root() {
    let sys = GovSystem::new(3);
    let registry = sys.registry_client();
    let gov = sys.gov_client();
    sys.commit(11);
    let old_root = sys.publish_root();
    let open = sys.open_proposal(&Address::generate(&sys.env), VoteMode::Private);

    assert_eq!(registry.start_epoch(&sys.roles.admin, &4), 2);
    assert_eq!(registry.current_root(), None);
    assert_eq!(registry.commitment_count(), 0);

    let title = soroban_sdk::String::from_str(&sys.env, "Next epoch");
    assert_eq!(
        gov.try_submit_proposal(
            &Address::generate(&sys.env),
            &title,
            &title,
            &0,
            &0,
            &VoteMode::Private
        ),
        Err(Ok(GovError::RootNotSet))
    );

    // Proposals from the previous epoch keep their own root
    assert_eq!(sys.vote_private(open, 11, &old_root, VoteChoice::Yes), Ok(()));

    // The same secret can be registered again in the new epoch
    sys.commit(11);
    let new_root = sys.publish_root();
    assert_ne!(new_root, old_root);
    assert_eq!(registry.current_root().unwrap().epoch, 2);
}

#[test]
fn test_tree_full() {
    let sys = GovSystem::new(1);
    sys.commit(1);
    sys.commit(2);

    let owner = Address::generate(&sys.env);
    let secret = soroban_sdk::U256::from_u32(&sys.env, 3);
    let c = zkgov_primitives::commitment::commitment(&sys.env, &secret);
    assert_eq!(
        sys.registry_client().try_register_commitment(&owner, &c),
        Err(Ok(GovError::TreeFull))
    );
}
