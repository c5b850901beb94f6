//! Commitment / nullifier derivation.
//!
//! `commitment = H(secret)` is what gets registered; `nullifier =
//! H(secret, proposal_id)` is what gets spent. Both are computed off-chain by
//! the voter and again inside the circuit; the on-chain copies exist so
//! tooling and tests agree on the exact encoding.

use soroban_sdk::{Env, U256};

use crate::{field, hash, GovError};

/// Proposal ids enter the field as plain integers.
pub fn proposal_signal(env: &Env, proposal_id: u64) -> U256 {
    U256::from_u128(env, u128::from(proposal_id))
}

pub fn commitment(env: &Env, secret: &U256) -> U256 {
    hash::hash_one(env, secret)
}

pub fn nullifier(env: &Env, secret: &U256, proposal_id: u64) -> U256 {
    hash::hash_pair(env, secret, &proposal_signal(env, proposal_id))
}

/// Secrets must be non-zero field elements.
pub fn validate_secret(env: &Env, secret: &U256) -> Result<(), GovError> {
    field::validate_element(env, secret)
}

pub fn derive_commitment(env: &Env, secret: &U256) -> Result<U256, GovError> {
    validate_secret(env, secret)?;
    Ok(commitment(env, secret))
}

pub fn derive_nullifier(env: &Env, secret: &U256, proposal_id: u64) -> Result<U256, GovError> {
    validate_secret(env, secret)?;
    Ok(nullifier(env, secret, proposal_id))
}
