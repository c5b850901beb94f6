//! # Governance
//!
//! Proposal state machine and weighted tally for two voting modes:
//!
//! - **Public**: registered addresses vote with
//!   `weight = token term + reputation term` (see [`weight`]).
//! - **Private**: anyone holding a secret whose commitment is in the voter-set
//!   tree votes with a Groth16 proof and a per-proposal nullifier. Each
//!   private vote carries the `private_vote_weight` in force when the
//!   proposal was submitted.
//!
//! ```text
//! Pending --start_voting--> Active --finalize_proposal--> Succeeded | Defeated
//!    \                        /
//!     `---cancel_proposal----'--> Cancelled
//! ```
//!
//! Collaborators are other contracts: the voter registry (membership, root),
//! the proof verifier (key hash, proof check) and a SEP-41 token (balances).
//! All of them are only read; every local write happens after the last
//! external call of an entry point.

#![no_std]
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, symbol_short, token::TokenClient,
    Address, BytesN, Env, IntoVal, String, Symbol, Vec, U256,
};
use zkgov_primitives::{
    commitment::proposal_signal, field, require_allowed, GovError, Operation, Proof, PublicSignals,
    Roles, RootRecord,
};

pub mod config;
pub mod nullifiers;
pub mod proposal;
pub mod reputation;
pub mod weight;

pub use config::GovernanceConfig;
pub use proposal::{Proposal, ProposalState, Vote, VoteChoice, VoteMode, VoterKey};
pub use reputation::ReputationRecord;
pub use weight::WeightParameters;

const ROLES: Symbol = symbol_short!("roles");
const REGISTRY: Symbol = symbol_short!("registry");
const TOKEN: Symbol = symbol_short!("token");
const VERIFIER: Symbol = symbol_short!("verifier");
const CONFIG: Symbol = symbol_short!("config");
const WEIGHTS: Symbol = symbol_short!("weights");
const PROPOSAL_COUNT: Symbol = symbol_short!("prop_cnt");
const VERSION: u32 = 1;
const VERSION_KEY: Symbol = symbol_short!("ver");

const MAX_BATCH: u32 = 100;
// Page size when summing registered voters' weight
const VOTER_PAGE: u32 = 50;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Proposal(u64),
    Vote(u64, VoterKey),
    Reputation(Address),
    Nullifier(u64, U256),
}

// Typed Events
#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalCreatedEvent {
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
    pub mode: VoteMode,
    pub voting_start: u64,
    pub voting_deadline: u64,
    pub eligible_weight: i128,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct VotingStartedEvent {
    #[topic]
    pub proposal_id: u64,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct VoteCastEvent {
    #[topic]
    pub proposal_id: u64,
    pub voter: VoterKey,
    pub support: VoteChoice,
    pub weight: i128,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalFinalizedEvent {
    #[topic]
    pub proposal_id: u64,
    pub state: ProposalState,
    pub yes_weight: i128,
    pub no_weight: i128,
    pub total_weight: i128,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalCancelledEvent {
    #[topic]
    pub proposal_id: u64,
    pub cancelled_by: Address,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ReputationUpdatedEvent {
    #[topic]
    pub subject: Address,
    pub score: u32,
    pub active: bool,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct WeightParametersUpdatedEvent {
    pub token_weight_bps: u32,
    pub reputation_weight_bps: u32,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigUpdatedEvent {
    pub config: GovernanceConfig,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct RolesUpdatedEvent {
    pub admin: Address,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct ContractUpgraded {
    pub from: u32,
    pub to: u32,
}

#[contract]
pub struct Governance;

#[contractimpl]
impl Governance {
    /// Constructor: wire collaborators and fix the initial parameters.
    pub fn __constructor(
        env: Env,
        roles: Roles,
        registry: Address,
        token: Address,
        verifier: Address,
        config: GovernanceConfig,
        weights: WeightParameters,
    ) {
        if env.storage().instance().has(&VERSION_KEY) {
            panic_with_error!(&env, GovError::AlreadyInitialized);
        }
        if let Err(e) = config.validate().and_then(|_| weights.validate()) {
            panic_with_error!(&env, e);
        }

        env.storage().instance().set(&VERSION_KEY, &VERSION);
        env.storage().instance().set(&ROLES, &roles);
        env.storage().instance().set(&REGISTRY, &registry);
        env.storage().instance().set(&TOKEN, &token);
        env.storage().instance().set(&VERIFIER, &verifier);
        env.storage().instance().set(&CONFIG, &config);
        env.storage().instance().set(&WEIGHTS, &weights);

        ContractUpgraded {
            from: 0,
            to: VERSION,
        }
        .publish(&env);
    }

    // ------------------------------------------------------------------
    // Proposals
    // ------------------------------------------------------------------

    /// Submit a proposal. Voting opens `voting_delay` seconds from now and
    /// lasts `voting_period` seconds.
    ///
    /// Public mode: the proposer must be a registered voter whose weight
    /// meets `proposal_threshold`; the quorum basis is the summed current
    /// weight of all registered voters.
    ///
    /// Private mode: the registry's published root, its leaf count and the
    /// verifier's key hash are snapshotted, as is `private_vote_weight`, so
    /// every ballot on the proposal weighs the same; the quorum basis is
    /// `leaf_count * private_vote_weight`.
    pub fn submit_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        min_token_threshold: i128,
        min_reputation_threshold: u32,
        mode: VoteMode,
    ) -> Result<u64, GovError> {
        require_allowed(&Self::roles(env.clone()), &proposer, Operation::SelfService)?;
        proposal::validate_text(&title, &description)?;
        reputation::validate_score(min_reputation_threshold)?;

        let config = Self::config(env.clone());
        let now = env.ledger().timestamp();
        let voting_start = now.checked_add(config.voting_delay).ok_or(GovError::Overflow)?;
        let voting_deadline = voting_start
            .checked_add(config.voting_period)
            .ok_or(GovError::Overflow)?;

        let mut eligible_weight = 0i128;
        let mut voter_set_root = None;
        let mut root_leaf_count = 0u32;
        let mut root_epoch = 0u32;
        let mut private_vote_weight = 0i128;
        let mut vk_hash = None;

        match mode {
            VoteMode::Public => {
                if !Self::registry_is_voter(&env, &proposer) {
                    return Err(GovError::NotRegisteredVoter);
                }
                if Self::weight_of(env.clone(), proposer.clone())? < config.proposal_threshold {
                    return Err(GovError::BelowProposalThreshold);
                }
                eligible_weight = Self::registered_weight(&env)?;
            }
            VoteMode::Private => {
                let record = Self::registry_root(&env).ok_or(GovError::RootNotSet)?;
                vk_hash = Some(Self::verifier_vk_hash(&env)?);
                eligible_weight = i128::from(record.leaf_count)
                    .checked_mul(config.private_vote_weight)
                    .ok_or(GovError::Overflow)?;
                voter_set_root = Some(record.root);
                root_leaf_count = record.leaf_count;
                root_epoch = record.epoch;
                private_vote_weight = config.private_vote_weight;
            }
        }

        let id = Self::proposal_count(env.clone())
            .checked_add(1)
            .ok_or(GovError::Overflow)?;
        let proposal = Proposal {
            id,
            title,
            description,
            proposer: proposer.clone(),
            mode,
            state: ProposalState::Pending,
            created_at: now,
            voting_start,
            voting_deadline,
            yes_weight: 0,
            no_weight: 0,
            abstain_weight: 0,
            total_weight: 0,
            min_token_threshold,
            min_reputation_threshold,
            eligible_weight,
            voter_set_root,
            root_leaf_count,
            root_epoch,
            private_vote_weight,
            vk_hash,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Proposal(id), &proposal);
        env.storage().instance().set(&PROPOSAL_COUNT, &id);

        ProposalCreatedEvent {
            proposal_id: id,
            proposer,
            mode,
            voting_start,
            voting_deadline,
            eligible_weight,
        }
        .publish(&env);

        Ok(id)
    }

    /// `Pending -> Active` once `voting_start` is reached. Permissionless.
    pub fn start_voting(env: Env, proposal_id: u64) -> Result<(), GovError> {
        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        if proposal.state != ProposalState::Pending {
            return Err(GovError::NotPending);
        }
        if env.ledger().timestamp() < proposal.voting_start {
            return Err(GovError::VotingNotStarted);
        }

        proposal.state = ProposalState::Active;
        Self::save_proposal(&env, &proposal);

        VotingStartedEvent { proposal_id }.publish(&env);
        Ok(())
    }

    /// Public-mode vote with the caller's current weight.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        support: VoteChoice,
    ) -> Result<i128, GovError> {
        require_allowed(&Self::roles(env.clone()), &voter, Operation::SelfService)?;

        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        Self::require_open(&env, &proposal)?;
        if proposal.mode != VoteMode::Public {
            return Err(GovError::WrongVoteMode);
        }
        if !Self::registry_is_voter(&env, &voter) {
            return Err(GovError::NotRegisteredVoter);
        }
        let key = VoterKey::Address(voter.clone());
        if Self::has_voted(env.clone(), proposal_id, key.clone()) {
            return Err(GovError::AlreadyVoted);
        }

        let balance = Self::token_balance(&env, &voter);
        let score = reputation::effective_score(&env, &voter);
        if balance < proposal.min_token_threshold || score < proposal.min_reputation_threshold {
            return Err(GovError::BelowVotingThreshold);
        }
        let config = Self::config(env.clone());
        let weight = weight::compute_weight(
            balance,
            score,
            config.rep_scale,
            &Self::weight_parameters(env.clone()),
        )?;
        if weight <= 0 {
            return Err(GovError::NoVotingPower);
        }

        Self::record_vote(&env, &mut proposal, key, support, weight)?;
        Ok(weight)
    }

    /// Private-mode vote. `public_signals` must be
    /// `[root, proposal_id, vote_choice, nullifier]` and agree with the
    /// arguments. Abstaining is not expressible in the circuit.
    pub fn cast_private_vote(
        env: Env,
        proposal_id: u64,
        support: VoteChoice,
        nullifier: U256,
        proof: Proof,
        public_signals: Vec<U256>,
    ) -> Result<(), GovError> {
        // Field validation
        field::validate_nullifier(&env, &nullifier)?;
        let signals = PublicSignals::from_vec(&public_signals)?;
        for signal in public_signals.iter() {
            field::assert_in_field(&env, &signal)?;
        }

        // Signals must describe this call
        if signals.nullifier != nullifier
            || signals.proposal_id != proposal_signal(&env, proposal_id)
        {
            return Err(GovError::SignalMismatch);
        }
        let choice = support.circuit_value()?;
        if signals.vote_choice != U256::from_u32(&env, choice) {
            return Err(GovError::SignalMismatch);
        }

        if nullifiers::is_spent(&env, proposal_id, &nullifier) {
            return Err(GovError::NullifierSpent);
        }

        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        Self::require_open(&env, &proposal)?;
        if proposal.mode != VoteMode::Private {
            return Err(GovError::WrongVoteMode);
        }
        if proposal.voter_set_root.as_ref() != Some(&signals.root) {
            return Err(GovError::RootMismatch);
        }
        if proposal.vk_hash.as_ref() != Some(&Self::verifier_vk_hash(&env)?) {
            return Err(GovError::VerificationKeyChanged);
        }
        if !Self::verifier_verify(&env, &proof, &public_signals) {
            return Err(GovError::InvalidProof);
        }

        // Spent before the vote is recorded
        nullifiers::mark_spent(&env, proposal_id, &nullifier)?;
        let weight = proposal.private_vote_weight;
        Self::record_vote(
            &env,
            &mut proposal,
            VoterKey::Nullifier(nullifier),
            support,
            weight,
        )
    }

    /// `Active -> Succeeded | Defeated` at or after `voting_deadline`.
    /// Succeeded iff `yes > no` and `total * 100 >= eligible * quorum%`.
    pub fn finalize_proposal(env: Env, proposal_id: u64) -> Result<ProposalState, GovError> {
        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        if proposal.state != ProposalState::Active {
            return Err(GovError::NotActive);
        }
        if env.ledger().timestamp() < proposal.voting_deadline {
            return Err(GovError::DeadlineNotReached);
        }

        let quorum_met = weight::quorum_reached(
            proposal.total_weight,
            proposal.eligible_weight,
            Self::config(env.clone()).quorum_percentage,
        )?;
        proposal.state = if proposal.yes_weight > proposal.no_weight && quorum_met {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        };
        Self::save_proposal(&env, &proposal);

        ProposalFinalizedEvent {
            proposal_id,
            state: proposal.state,
            yes_weight: proposal.yes_weight,
            no_weight: proposal.no_weight,
            total_weight: proposal.total_weight,
        }
        .publish(&env);
        Ok(proposal.state)
    }

    /// Proposer or admin, from `Pending` or `Active`.
    pub fn cancel_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), GovError> {
        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        require_allowed(
            &Self::roles(env.clone()),
            &caller,
            Operation::CancelProposal {
                proposer: &proposal.proposer,
            },
        )?;
        if proposal.state.is_terminal() {
            return Err(GovError::NotActive);
        }

        proposal.state = ProposalState::Cancelled;
        Self::save_proposal(&env, &proposal);

        ProposalCancelledEvent {
            proposal_id,
            cancelled_by: caller,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, GovError> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(GovError::ProposalNotFound)
    }

    pub fn proposal_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&PROPOSAL_COUNT)
            .unwrap_or(0)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: VoterKey) -> Option<Vote> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(proposal_id, voter))
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: VoterKey) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Vote(proposal_id, voter))
    }

    /// (yes, no, abstain, total)
    pub fn get_results(env: Env, proposal_id: u64) -> Result<(i128, i128, i128, i128), GovError> {
        let p = Self::get_proposal(env, proposal_id)?;
        Ok((p.yes_weight, p.no_weight, p.abstain_weight, p.total_weight))
    }

    pub fn is_nullifier_spent(env: Env, proposal_id: u64, nullifier: U256) -> bool {
        nullifiers::is_spent(&env, proposal_id, &nullifier)
    }

    // ------------------------------------------------------------------
    // Weight and reputation
    // ------------------------------------------------------------------

    /// Current public-mode weight of `voter`.
    pub fn weight_of(env: Env, voter: Address) -> Result<i128, GovError> {
        let balance = Self::token_balance(&env, &voter);
        let score = reputation::effective_score(&env, &voter);
        weight::compute_weight(
            balance,
            score,
            Self::config(env.clone()).rep_scale,
            &Self::weight_parameters(env),
        )
    }

    pub fn weight_parameters(env: Env) -> WeightParameters {
        env.storage()
            .instance()
            .get(&WEIGHTS)
            .unwrap_or_else(|| panic_with_error!(&env, GovError::NotInitialized))
    }

    /// Admin only. The two basis point values must sum to 10000.
    pub fn update_weight_parameters(
        env: Env,
        caller: Address,
        token_weight_bps: u32,
        reputation_weight_bps: u32,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::Administer)?;
        let params = WeightParameters::new(token_weight_bps, reputation_weight_bps)?;
        env.storage().instance().set(&WEIGHTS, &params);

        WeightParametersUpdatedEvent {
            token_weight_bps,
            reputation_weight_bps,
        }
        .publish(&env);
        Ok(())
    }

    pub fn set_reputation(
        env: Env,
        caller: Address,
        subject: Address,
        score: u32,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::UpdateReputation)?;
        let record = reputation::upsert_score(&env, &subject, score)?;
        Self::publish_reputation(&env, &record);
        Ok(())
    }

    /// All or nothing: every score is validated before any record is written.
    pub fn batch_set_reputation(
        env: Env,
        caller: Address,
        subjects: Vec<Address>,
        scores: Vec<u32>,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::UpdateReputation)?;
        if subjects.len() != scores.len() {
            return Err(GovError::BatchLengthMismatch);
        }
        if subjects.is_empty() {
            return Err(GovError::EmptyBatch);
        }
        if subjects.len() > MAX_BATCH {
            return Err(GovError::BatchTooLarge);
        }
        for score in scores.iter() {
            reputation::validate_score(score)?;
        }

        for (subject, score) in subjects.iter().zip(scores.iter()) {
            let record = reputation::upsert_score(&env, &subject, score)?;
            Self::publish_reputation(&env, &record);
        }
        Ok(())
    }

    /// Inactive records keep their score but contribute zero.
    pub fn set_reputation_active(
        env: Env,
        caller: Address,
        subject: Address,
        active: bool,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::UpdateReputation)?;
        let record = ReputationRecord {
            score: reputation::load(&env, &subject).map(|r| r.score).unwrap_or(0),
            subject,
            active,
            updated_at: env.ledger().timestamp(),
        };
        reputation::store(&env, &record);
        Self::publish_reputation(&env, &record);
        Ok(())
    }

    pub fn reputation(env: Env, subject: Address) -> Option<ReputationRecord> {
        reputation::load(&env, &subject)
    }

    // ------------------------------------------------------------------
    // Administration
    // ------------------------------------------------------------------

    pub fn update_config(
        env: Env,
        caller: Address,
        config: GovernanceConfig,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::Administer)?;
        config.validate()?;
        env.storage().instance().set(&CONFIG, &config);

        ConfigUpdatedEvent { config }.publish(&env);
        Ok(())
    }

    pub fn config(env: Env) -> GovernanceConfig {
        env.storage()
            .instance()
            .get(&CONFIG)
            .unwrap_or_else(|| panic_with_error!(&env, GovError::NotInitialized))
    }

    pub fn set_roles(env: Env, caller: Address, roles: Roles) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::Administer)?;
        env.storage().instance().set(&ROLES, &roles);
        RolesUpdatedEvent { admin: roles.admin }.publish(&env);
        Ok(())
    }

    pub fn roles(env: Env) -> Roles {
        env.storage()
            .instance()
            .get(&ROLES)
            .unwrap_or_else(|| panic_with_error!(&env, GovError::NotInitialized))
    }

    /// (registry, token, verifier)
    pub fn collaborators(env: Env) -> (Address, Address, Address) {
        (
            Self::instance_address(&env, &REGISTRY),
            Self::instance_address(&env, &TOKEN),
            Self::instance_address(&env, &VERIFIER),
        )
    }

    /// Contract version for upgrade tracking.
    pub fn version(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&VERSION_KEY)
            .unwrap_or(VERSION)
    }

    // Internal helpers

    fn require_open(env: &Env, proposal: &Proposal) -> Result<(), GovError> {
        if proposal.state != ProposalState::Active {
            return Err(GovError::NotActive);
        }
        if env.ledger().timestamp() >= proposal.voting_deadline {
            return Err(GovError::VotingClosed);
        }
        Ok(())
    }

    fn record_vote(
        env: &Env,
        proposal: &mut Proposal,
        voter: VoterKey,
        support: VoteChoice,
        weight: i128,
    ) -> Result<(), GovError> {
        let key = DataKey::Vote(proposal.id, voter.clone());
        if env.storage().persistent().has(&key) {
            return Err(GovError::AlreadyVoted);
        }
        proposal.apply_vote(support, weight)?;

        let vote = Vote {
            proposal_id: proposal.id,
            voter: voter.clone(),
            support,
            weight,
            timestamp: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&key, &vote);
        Self::save_proposal(env, proposal);

        VoteCastEvent {
            proposal_id: proposal.id,
            voter,
            support,
            weight,
        }
        .publish(env);
        Ok(())
    }

    fn save_proposal(env: &Env, proposal: &Proposal) {
        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }

    fn publish_reputation(env: &Env, record: &ReputationRecord) {
        ReputationUpdatedEvent {
            subject: record.subject.clone(),
            score: record.score,
            active: record.active,
        }
        .publish(env);
    }

    fn instance_address(env: &Env, key: &Symbol) -> Address {
        env.storage()
            .instance()
            .get(key)
            .unwrap_or_else(|| panic_with_error!(env, GovError::NotInitialized))
    }

    fn token_balance(env: &Env, holder: &Address) -> i128 {
        TokenClient::new(env, &Self::instance_address(env, &TOKEN)).balance(holder)
    }

    fn registry_is_voter(env: &Env, voter: &Address) -> bool {
        env.invoke_contract(
            &Self::instance_address(env, &REGISTRY),
            &symbol_short!("is_voter"),
            soroban_sdk::vec![env, voter.into_val(env)],
        )
    }

    fn registry_root(env: &Env) -> Option<RootRecord> {
        env.invoke_contract(
            &Self::instance_address(env, &REGISTRY),
            &Symbol::new(env, "current_root"),
            soroban_sdk::vec![env],
        )
    }

    // Sum of current weight over every registered address. The registry caps
    // the set (MAX_VOTERS), which keeps this within one transaction.
    fn registered_weight(env: &Env) -> Result<i128, GovError> {
        let registry = Self::instance_address(env, &REGISTRY);
        let count: u32 = env.invoke_contract(
            &registry,
            &Symbol::new(env, "voter_count"),
            soroban_sdk::vec![env],
        );

        let mut total = 0i128;
        let mut offset = 0u32;
        while offset < count {
            let page: Vec<Address> = env.invoke_contract(
                &registry,
                &symbol_short!("voters"),
                soroban_sdk::vec![env, offset.into_val(env), VOTER_PAGE.into_val(env)],
            );
            if page.is_empty() {
                break;
            }
            for voter in page.iter() {
                let w = Self::weight_of(env.clone(), voter)?;
                total = total.checked_add(w).ok_or(GovError::Overflow)?;
            }
            offset += page.len();
        }
        Ok(total)
    }

    fn verifier_vk_hash(env: &Env) -> Result<BytesN<32>, GovError> {
        match env.try_invoke_contract::<BytesN<32>, GovError>(
            &Self::instance_address(env, &VERIFIER),
            &symbol_short!("vk_hash"),
            soroban_sdk::vec![env],
        ) {
            Ok(Ok(hash)) => Ok(hash),
            _ => Err(GovError::VerificationKeyNotSet),
        }
    }

    fn verifier_verify(env: &Env, proof: &Proof, public_signals: &Vec<U256>) -> bool {
        matches!(
            env.try_invoke_contract::<bool, GovError>(
                &Self::instance_address(env, &VERIFIER),
                &symbol_short!("verify"),
                soroban_sdk::vec![env, proof.into_val(env), public_signals.into_val(env)],
            ),
            Ok(Ok(true))
        )
    }
}
