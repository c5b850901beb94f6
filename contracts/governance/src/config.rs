use soroban_sdk::contracttype;
use zkgov_primitives::GovError;

use crate::weight::DEFAULT_REP_SCALE;

pub const DEFAULT_VOTING_DELAY: u64 = 0;
pub const DEFAULT_VOTING_PERIOD: u64 = 7 * 24 * 60 * 60; // one week
pub const DEFAULT_QUORUM_PERCENTAGE: u32 = 10;
pub const DEFAULT_PRIVATE_VOTE_WEIGHT: i128 = 1;

/// Governance parameters, all fixed at construction and updatable by the
/// admin. Updates only apply to proposals submitted afterwards, except
/// `private_vote_weight` which is read when a private vote is cast.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceConfig {
    /// Seconds between submission and `voting_start`
    pub voting_delay: u64,
    /// Seconds between `voting_start` and `voting_deadline`
    pub voting_period: u64,
    /// Minimum proposer weight (public mode)
    pub proposal_threshold: i128,
    /// Percentage (0..=100) of the eligible weight snapshot that must vote
    pub quorum_percentage: u32,
    /// Base units per reputation point
    pub rep_scale: i128,
    /// Weight carried by each private vote
    pub private_vote_weight: i128,
}

impl GovernanceConfig {
    pub fn default_with_threshold(proposal_threshold: i128) -> Self {
        Self {
            voting_delay: DEFAULT_VOTING_DELAY,
            voting_period: DEFAULT_VOTING_PERIOD,
            proposal_threshold,
            quorum_percentage: DEFAULT_QUORUM_PERCENTAGE,
            rep_scale: DEFAULT_REP_SCALE,
            private_vote_weight: DEFAULT_PRIVATE_VOTE_WEIGHT,
        }
    }

    pub fn validate(&self) -> Result<(), GovError> {
        if self.voting_period == 0 {
            return Err(GovError::ZeroDuration);
        }
        if self.quorum_percentage > 100 {
            return Err(GovError::InvalidQuorum);
        }
        if self.rep_scale <= 0 {
            return Err(GovError::InvalidRepScale);
        }
        if self.private_vote_weight <= 0 {
            return Err(GovError::InvalidPrivateWeight);
        }
        Ok(())
    }
}
