use soroban_sdk::{contracttype, Address, BytesN, String, U256};
use zkgov_primitives::GovError;

pub const MAX_TITLE_LEN: u32 = 256;
pub const MAX_DESCRIPTION_LEN: u32 = 1024; // 1KB

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Pending,
    Active,
    Succeeded,
    Defeated,
    Cancelled,
}

impl ProposalState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalState::Succeeded | ProposalState::Defeated | ProposalState::Cancelled
        )
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteMode {
    /// Registered addresses vote with their token + reputation weight
    Public,
    /// Anonymous votes proven against the voter-set root snapshot
    Private,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Yes,
    No,
    Abstain,
}

impl VoteChoice {
    /// Circuit encoding: 1 = yes, 0 = no. Private votes cannot abstain.
    pub fn circuit_value(&self) -> Result<u32, GovError> {
        match self {
            VoteChoice::Yes => Ok(1),
            VoteChoice::No => Ok(0),
            VoteChoice::Abstain => Err(GovError::InvalidVoteChoice),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VoterKey {
    Address(Address),
    Nullifier(U256),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub proposer: Address,
    pub mode: VoteMode,
    pub state: ProposalState,
    pub created_at: u64,
    pub voting_start: u64,
    pub voting_deadline: u64,
    pub yes_weight: i128,
    pub no_weight: i128,
    pub abstain_weight: i128,
    pub total_weight: i128,
    pub min_token_threshold: i128,
    pub min_reputation_threshold: u32,
    /// Quorum basis captured at submission
    pub eligible_weight: i128,
    /// Private mode only: root, leaf count and epoch of the voter set
    pub voter_set_root: Option<U256>,
    pub root_leaf_count: u32,
    pub root_epoch: u32,
    /// Private mode only: weight of every ballot, fixed at submission
    pub private_vote_weight: i128,
    /// Private mode only: verifier key pinned for the proposal's lifetime
    pub vk_hash: Option<BytesN<32>>,
}

impl Proposal {
    /// Add `weight` to the bucket for `support` and to the total.
    pub fn apply_vote(&mut self, support: VoteChoice, weight: i128) -> Result<(), GovError> {
        let total = self
            .total_weight
            .checked_add(weight)
            .ok_or(GovError::Overflow)?;
        let bucket = match support {
            VoteChoice::Yes => &mut self.yes_weight,
            VoteChoice::No => &mut self.no_weight,
            VoteChoice::Abstain => &mut self.abstain_weight,
        };
        *bucket = bucket.checked_add(weight).ok_or(GovError::Overflow)?;
        self.total_weight = total;
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub proposal_id: u64,
    pub voter: VoterKey,
    pub support: VoteChoice,
    pub weight: i128,
    pub timestamp: u64,
}

pub fn validate_text(title: &String, description: &String) -> Result<(), GovError> {
    if title.len() == 0 {
        return Err(GovError::EmptyTitle);
    }
    if description.len() == 0 {
        return Err(GovError::EmptyDescription);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(GovError::TitleTooLong);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(GovError::DescriptionTooLong);
    }
    Ok(())
}
