//! Spent nullifiers, keyed by `(proposal_id, nullifier)`.
//!
//! A nullifier is only meaningful for the proposal it was derived for, so the
//! same secret votes independently on every proposal.

use soroban_sdk::{Env, U256};
use zkgov_primitives::GovError;

use crate::DataKey;

pub fn is_spent(env: &Env, proposal_id: u64, nullifier: &U256) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Nullifier(proposal_id, nullifier.clone()))
}

/// Check-then-set. Fails without writing if already spent.
pub fn mark_spent(env: &Env, proposal_id: u64, nullifier: &U256) -> Result<(), GovError> {
    if is_spent(env, proposal_id, nullifier) {
        return Err(GovError::NullifierSpent);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Nullifier(proposal_id, nullifier.clone()), &true);
    Ok(())
}
