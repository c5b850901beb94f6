use soroban_sdk::{contracttype, Address, Env};
use zkgov_primitives::GovError;

use crate::DataKey;

pub const MIN_REPUTATION: u32 = 0;
pub const MAX_REPUTATION: u32 = 100;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReputationRecord {
    pub subject: Address,
    pub score: u32,
    pub active: bool,
    pub updated_at: u64,
}

pub fn validate_score(score: u32) -> Result<(), GovError> {
    if !(MIN_REPUTATION..=MAX_REPUTATION).contains(&score) {
        return Err(GovError::ReputationOutOfRange);
    }
    Ok(())
}

pub fn load(env: &Env, subject: &Address) -> Option<ReputationRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Reputation(subject.clone()))
}

pub fn store(env: &Env, record: &ReputationRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Reputation(record.subject.clone()), record);
}

/// Score that counts towards weight and thresholds; inactive or missing
/// records count as zero.
pub fn effective_score(env: &Env, subject: &Address) -> u32 {
    match load(env, subject) {
        Some(record) if record.active => record.score,
        _ => 0,
    }
}

/// Upsert keeping the `active` flag of an existing record; new records are
/// active.
pub fn upsert_score(
    env: &Env,
    subject: &Address,
    score: u32,
) -> Result<ReputationRecord, GovError> {
    validate_score(score)?;
    let active = load(env, subject).map(|r| r.active).unwrap_or(true);
    let record = ReputationRecord {
        subject: subject.clone(),
        score,
        active,
        updated_at: env.ledger().timestamp(),
    };
    store(env, &record);
    Ok(record)
}
