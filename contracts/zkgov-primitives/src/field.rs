//! BN254 scalar field bounds.
//!
//! Every value that crosses into a proof (roots, commitments, nullifiers,
//! proposal ids, vote choices) must be reduced already. A value >= r would be
//! reduced mod r inside the circuit while being stored as a distinct key
//! on-chain, which is how double votes with `nullifier + r` would slip through.

use soroban_sdk::{Bytes, Env, U256};

use crate::GovError;

/// BN254 scalar field modulus (Fr) in big-endian bytes
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const BN254_FR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

pub fn modulus(env: &Env) -> U256 {
    U256::from_be_bytes(env, &Bytes::from_array(env, &BN254_FR_MODULUS))
}

pub fn is_in_field(env: &Env, value: &U256) -> bool {
    value < &modulus(env)
}

/// Returns `Err(GovError::SignalNotInField)` if value >= r.
pub fn assert_in_field(env: &Env, value: &U256) -> Result<(), GovError> {
    if !is_in_field(env, value) {
        return Err(GovError::SignalNotInField);
    }
    Ok(())
}

/// Non-zero and < r. Zero is the padding leaf, so it can never be a member.
pub fn validate_element(env: &Env, value: &U256) -> Result<(), GovError> {
    if value == &U256::from_u32(env, 0) {
        return Err(GovError::InvalidFieldElement);
    }
    assert_in_field(env, value)
}

/// Validate that a nullifier is non-zero and within the BN254 scalar field.
pub fn validate_nullifier(env: &Env, nullifier: &U256) -> Result<(), GovError> {
    if nullifier == &U256::from_u32(env, 0) {
        return Err(GovError::InvalidNullifier);
    }
    assert_in_field(env, nullifier)
}
