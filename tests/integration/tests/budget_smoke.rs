// Calls whose cost grows with the voter set, run at the registry caps
// under the default (network sized) budget instead of an unlimited one.

mod common;

use common::GovSystem;
use governance::VoteMode;
use soroban_sdk::{testutils::Address as _, Address, Vec, U256};
use voter_registry::{MAX_HASHED_LEAVES, MAX_VOTERS};
use zkgov_primitives::{commitment, GovError};

// Per-transaction instruction limit; the default budget enforces it too
const TX_CPU_LIMIT: u64 = 100_000_000;

#[test]
fn budget_public_submit_at_voter_cap() {
    let sys = GovSystem::new(20);
    let gov = sys.gov_client();
    let registry = sys.registry_client();

    let mut voters = std::vec::Vec::new();
    for _ in 0..MAX_VOTERS {
        let voter = sys.public_voter(100);
        gov.set_reputation(&sys.roles.reputation_updater, &voter, &50);
        voters.push(voter);
    }
    assert_eq!(
        registry.try_register_voter(&Address::generate(&sys.env)),
        Err(Ok(GovError::VoterSetFull))
    );

    let proposer = &voters[0];
    sys.env.cost_estimate().budget().reset_default();
    let cpu_before = sys.env.cost_estimate().budget().cpu_instruction_cost();
    let mem_before = sys.env.cost_estimate().budget().memory_bytes_cost();
    let id = sys.submit(proposer, VoteMode::Public);
    let cpu_after = sys.env.cost_estimate().budget().cpu_instruction_cost();
    let mem_after = sys.env.cost_estimate().budget().memory_bytes_cost();
    let cpu_delta = cpu_after.saturating_sub(cpu_before);
    let mem_delta = mem_after.saturating_sub(mem_before);
    println!(
        "[budget] submit_proposal ({} voters) cpu={} mem={}",
        MAX_VOTERS, cpu_delta, mem_delta
    );
    assert!(
        cpu_delta <= TX_CPU_LIMIT,
        "budget exceeded for submit_proposal: used {} > allowed {}",
        cpu_delta,
        TX_CPU_LIMIT
    );

    // Every registered voter is in the quorum basis
    sys.env.cost_estimate().budget().reset_unlimited();
    let per_voter = gov.weight_of(proposer);
    assert!(per_voter > 0);
    assert_eq!(
        gov.get_proposal(&id).eligible_weight,
        per_voter * i128::from(MAX_VOTERS)
    );
}

#[test]
fn budget_publish_root_at_hashing_cap() {
    let sys = GovSystem::new(20);
    let registry = sys.registry_client();
    let env = &sys.env;

    let mut batch = Vec::new(env);
    for secret in 1..=MAX_HASHED_LEAVES {
        batch.push_back(commitment::commitment(env, &U256::from_u32(env, secret)));
    }
    registry.batch_register_commitments(&sys.roles.admin, &batch);

    env.cost_estimate().budget().reset_default();
    let cpu_before = env.cost_estimate().budget().cpu_instruction_cost();
    let mem_before = env.cost_estimate().budget().memory_bytes_cost();
    let root = registry.publish_computed_root(&sys.roles.root_updater);
    let cpu_after = env.cost_estimate().budget().cpu_instruction_cost();
    let mem_after = env.cost_estimate().budget().memory_bytes_cost();
    let cpu_delta = cpu_after.saturating_sub(cpu_before);
    let mem_delta = mem_after.saturating_sub(mem_before);
    println!(
        "[budget] publish_computed_root ({} leaves, depth 20) cpu={} mem={}",
        MAX_HASHED_LEAVES, cpu_delta, mem_delta
    );
    assert!(
        cpu_delta <= TX_CPU_LIMIT,
        "budget exceeded for publish_computed_root: used {} > allowed {}",
        cpu_delta,
        TX_CPU_LIMIT
    );

    env.cost_estimate().budget().reset_unlimited();
    let record = registry.current_root().unwrap();
    assert_eq!(record.root, root);
    assert_eq!(record.leaf_count, MAX_HASHED_LEAVES);

    // One more leaf and the root has to come from off-chain
    sys.commit(MAX_HASHED_LEAVES + 1);
    assert_eq!(
        registry.try_publish_computed_root(&sys.roles.root_updater),
        Err(Ok(GovError::ArenaTooLargeToHash))
    );
}
