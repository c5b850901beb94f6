//! Domain hash: Poseidon over the BN254 scalar field (circomlib parameters),
//! computed by the Soroban host.

use soroban_sdk::{Env, Symbol, U256};

const FIELD: &str = "BN254";

/// `H(a, b)`. Used for Merkle parents and nullifiers.
pub fn hash_pair(env: &Env, left: &U256, right: &U256) -> U256 {
    let field = Symbol::new(env, FIELD);
    let inputs = soroban_sdk::vec![env, left.clone(), right.clone()];
    env.crypto().poseidon_hash(&inputs, field)
}

/// `H(a)`. Used for commitments.
pub fn hash_one(env: &Env, value: &U256) -> U256 {
    let field = Symbol::new(env, FIELD);
    let inputs = soroban_sdk::vec![env, value.clone()];
    env.crypto().poseidon_hash(&inputs, field)
}
