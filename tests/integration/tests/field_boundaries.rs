// Scalar field boundaries at every contract entry point that accepts a
// field element. r = BN254 scalar field order.

mod common;

use common::{hex_str_to_u256, parse_u256, GovSystem};
use governance::{VoteChoice, VoteMode};
use soroban_sdk::{testutils::Address as _, Address, U256};
use zkgov_primitives::{field, testutils, GovError, PublicSignals};

const R_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";
const R_MINUS_ONE_HEX: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000000";

#[test]
fn test_modulus_constant() {
    let env = soroban_sdk::Env::default();
    let r = parse_u256(&env, R_DEC);
    assert_eq!(field::modulus(&env), r);

    let r_minus_one = hex_str_to_u256(&env, R_MINUS_ONE_HEX);
    assert_eq!(r_minus_one.add(&U256::from_u32(&env, 1)), r);
    assert!(field::is_in_field(&env, &r_minus_one));
    assert!(!field::is_in_field(&env, &r));
}

#[test]
fn test_registry_rejects_out_of_field_commitment() {
    let sys = GovSystem::new(3);
    let registry = sys.registry_client();
    let env = &sys.env;
    let owner = Address::generate(env);

    assert_eq!(
        registry.try_register_commitment(&owner, &parse_u256(env, R_DEC)),
        Err(Ok(GovError::SignalNotInField))
    );
    assert_eq!(
        registry.try_register_commitment(&owner, &U256::from_u32(env, 0)),
        Err(Ok(GovError::InvalidFieldElement))
    );
    // r - 1 is a valid element
    registry.register_commitment(&owner, &hex_str_to_u256(env, R_MINUS_ONE_HEX));

    assert_eq!(
        registry.try_update_voter_set_root(&sys.roles.root_updater, &parse_u256(env, R_DEC), &1),
        Err(Ok(GovError::SignalNotInField))
    );
}

#[test]
fn test_aliased_nullifier_rejected() {
    let sys = GovSystem::new(3);
    sys.commit(7);
    let root = sys.publish_root();
    let gov = sys.gov_client();
    let env = &sys.env;
    let id = sys.open_proposal(&Address::generate(env), VoteMode::Private);

    sys.vote_private(id, 7, &root, VoteChoice::Yes).unwrap();

    // nullifier + r reduces to the spent nullifier inside the circuit
    let nullifier = zkgov_primitives::commitment::nullifier(env, &U256::from_u32(env, 7), id);
    let aliased = nullifier.add(&field::modulus(env));
    let signals = PublicSignals::new(env, root.clone(), id, 1, aliased.clone()).to_vec(env);
    let proof = testutils::forge_proof(env, &sys.vk, &signals);
    assert_eq!(
        gov.try_cast_private_vote(&id, &VoteChoice::Yes, &aliased, &proof, &signals),
        Err(Ok(GovError::SignalNotInField))
    );
    assert_eq!(gov.get_results(&id), (1, 0, 0, 1));
}

#[test]
fn test_aliased_root_rejected() {
    let sys = GovSystem::new(3);
    sys.commit(7);
    let root = sys.publish_root();
    let env = &sys.env;
    let id = sys.open_proposal(&Address::generate(env), VoteMode::Private);

    let nullifier = zkgov_primitives::commitment::nullifier(env, &U256::from_u32(env, 7), id);
    let aliased_root = root.add(&field::modulus(env));
    let signals = PublicSignals::new(env, aliased_root, id, 1, nullifier.clone()).to_vec(env);
    let proof = testutils::forge_proof(env, &sys.vk, &signals);
    assert_eq!(
        sys.gov_client()
            .try_cast_private_vote(&id, &VoteChoice::Yes, &nullifier, &proof, &signals),
        Err(Ok(GovError::SignalNotInField))
    );
}
