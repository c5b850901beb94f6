//! Voting weight and quorum arithmetic.
//!
//! ```text
//! weight = floor(balance * token_bps / 10000)
//!        + floor(score * rep_scale * reputation_bps / 10000)
//! ```
//!
//! `rep_scale` converts reputation points (0..=100) into token base units so
//! the basis point split means what it says. With the default of 10^7 one
//! point weighs as much as one whole 7-decimal Stellar token.

use soroban_sdk::contracttype;
use zkgov_primitives::GovError;

pub const BPS_DENOMINATOR: u32 = 10_000;
pub const DEFAULT_REP_SCALE: i128 = 10_000_000;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightParameters {
    pub token_weight_bps: u32,
    pub reputation_weight_bps: u32,
}

impl WeightParameters {
    pub fn new(token_weight_bps: u32, reputation_weight_bps: u32) -> Result<Self, GovError> {
        let params = Self {
            token_weight_bps,
            reputation_weight_bps,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), GovError> {
        match self.token_weight_bps.checked_add(self.reputation_weight_bps) {
            Some(BPS_DENOMINATOR) => Ok(()),
            _ => Err(GovError::WeightBpsSum),
        }
    }
}

/// Negative balances count as zero.
pub fn token_term(balance: i128, params: &WeightParameters) -> Result<i128, GovError> {
    let scaled = balance
        .max(0)
        .checked_mul(i128::from(params.token_weight_bps))
        .ok_or(GovError::Overflow)?;
    Ok(scaled / i128::from(BPS_DENOMINATOR))
}

pub fn reputation_term(
    score: u32,
    rep_scale: i128,
    params: &WeightParameters,
) -> Result<i128, GovError> {
    let scaled = i128::from(score)
        .checked_mul(rep_scale)
        .and_then(|v| v.checked_mul(i128::from(params.reputation_weight_bps)))
        .ok_or(GovError::Overflow)?;
    Ok(scaled / i128::from(BPS_DENOMINATOR))
}

/// `score` is the effective score: zero for missing or inactive records.
pub fn compute_weight(
    balance: i128,
    score: u32,
    rep_scale: i128,
    params: &WeightParameters,
) -> Result<i128, GovError> {
    token_term(balance, params)?
        .checked_add(reputation_term(score, rep_scale, params)?)
        .ok_or(GovError::Overflow)
}

/// Quorum is `quorum_percentage` of the eligible weight snapshotted at
/// submission: `total * 100 >= eligible * quorum_percentage`.
pub fn quorum_reached(
    total: i128,
    eligible: i128,
    quorum_percentage: u32,
) -> Result<bool, GovError> {
    let lhs = total.checked_mul(100).ok_or(GovError::Overflow)?;
    let rhs = eligible
        .checked_mul(i128::from(quorum_percentage))
        .ok_or(GovError::Overflow)?;
    Ok(lhs >= rhs)
}
