//! # Voter Registry
//!
//! Append-only voter sets for both voting modes:
//!
//! - **Public mode**: a set of addresses, enumerable by insertion order.
//! - **Private mode**: an arena of commitments `H(secret)` indexed by
//!   insertion order, plus a reverse index for O(1) duplicate checks. The
//!   ordered arena is exactly the leaf sequence of the membership tree, so any
//!   off-chain tool can rebuild the tree deterministically.
//!
//! The published voter-set root is set explicitly by the root updater and is
//! never recomputed on registration. Proposals snapshot it; proofs against
//! any other root are rejected by the governance contract.
//!
//! Both sets are sized so the calls that walk them fit in one transaction:
//! public proposals sum the weight of every address, so at most
//! [`MAX_VOTERS`] addresses register. Hashing the arena on-chain is limited
//! to [`MAX_HASHED_LEAVES`] commitments; larger arenas get their root from
//! off-chain tooling through `update_voter_set_root`.
//!
//! Commitments are scoped to an epoch that fixes the tree depth. Starting a
//! new epoch (e.g. to change the depth) invalidates every commitment and the
//! published root; voters re-register in the new epoch.

#![no_std]
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, symbol_short, Address, Env, IntoVal,
    Map, Symbol, Vec, U256,
};
use zkgov_primitives::{
    field,
    merkle::{self, MerkleProof, RootRecord, MAX_TREE_DEPTH},
    require_allowed, GovError, Operation, Roles,
};

const ROLES: Symbol = symbol_short!("roles");
const ELIGIBILITY: Symbol = symbol_short!("elig");
const EPOCH: Symbol = symbol_short!("epoch");
const ZEROS_CACHE: Symbol = symbol_short!("zeros");
const VERSION: u32 = 1;
const VERSION_KEY: Symbol = symbol_short!("ver");

const MAX_BATCH: u32 = 100;

/// Upper bound on registered addresses (public mode quorum basis)
pub const MAX_VOTERS: u32 = 50;
/// Upper bound on commitments hashed by `publish_computed_root` and the
/// tree views
pub const MAX_HASHED_LEAVES: u32 = 64;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Voter(Address),            // address -> bool
    VoterCount,                // total registered addresses
    VoterAt(u32),              // index -> address
    Commitment(u32, u32),      // (epoch, index) -> commitment
    CommitmentIndex(u32, U256), // (epoch, commitment) -> index
    CommitmentOwner(u32, Address), // (epoch, owner) -> index
    CommitmentCount(u32),      // epoch -> count
    Root(u32),                 // epoch -> RootRecord
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Epoch {
    pub number: u32,
    pub depth: u32,
    pub started_at: u64,
}

// Typed Events
#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct VoterRegisteredEvent {
    #[topic]
    pub voter: Address,
    pub index: u32,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct CommitmentRegisteredEvent {
    #[topic]
    pub epoch: u32,
    pub commitment: U256,
    pub index: u32,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct RootUpdatedEvent {
    #[topic]
    pub epoch: u32,
    pub root: U256,
    pub leaf_count: u32,
}

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct EpochStartedEvent {
    #[topic]
    pub epoch: u32,
    pub depth: u32,
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
pub struct VoterRegistry;

#[contractimpl]
impl VoterRegistry {
    /// Constructor: roles, tree depth for the first epoch and an optional
    /// eligibility contract exposing `is_eligible(subject) -> bool`.
    /// Also pre-computes the zeros cache so the first root computation
    /// doesn't pay for it.
    pub fn __constructor(env: Env, roles: Roles, depth: u32, eligibility: Option<Address>) {
        if env.storage().instance().has(&VERSION_KEY) {
            panic_with_error!(&env, GovError::AlreadyInitialized);
        }
        if let Err(e) = merkle::validate_depth(depth) {
            panic_with_error!(&env, e);
        }

        env.storage().instance().set(&VERSION_KEY, &VERSION);
        env.storage().instance().set(&ROLES, &roles);
        if let Some(eligibility) = eligibility {
            env.storage().instance().set(&ELIGIBILITY, &eligibility);
        }

        let epoch = Epoch {
            number: 1,
            depth,
            started_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&EPOCH, &epoch);

        Self::ensure_zeros_cache(&env);

        ContractUpgraded {
            from: 0,
            to: VERSION,
        }
        .publish(&env);
        EpochStartedEvent { epoch: 1, depth }.publish(&env);
    }

    // ------------------------------------------------------------------
    // Public mode: addresses
    // ------------------------------------------------------------------

    /// Register the caller's own address. Returns its index.
    pub fn register_voter(env: Env, voter: Address) -> Result<u32, GovError> {
        require_allowed(&Self::roles(env.clone()), &voter, Operation::SelfService)?;

        if Self::is_voter(env.clone(), voter.clone()) {
            return Err(GovError::AlreadyRegistered);
        }
        if Self::voter_count(env.clone()) >= MAX_VOTERS {
            return Err(GovError::VoterSetFull);
        }
        Self::check_eligible(&env, &voter)?;

        Ok(Self::append_voter(&env, &voter))
    }

    /// Register a batch of addresses (admin only). All or nothing: any
    /// ineligible, registered or repeated address rejects the batch.
    /// Returns the new voter count.
    pub fn batch_register_voters(
        env: Env,
        caller: Address,
        voters: Vec<Address>,
    ) -> Result<u32, GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::BatchRegister)?;
        Self::check_batch_size(voters.len())?;
        let new_count = Self::voter_count(env.clone())
            .checked_add(voters.len())
            .ok_or(GovError::Overflow)?;
        if new_count > MAX_VOTERS {
            return Err(GovError::VoterSetFull);
        }

        let mut seen: Map<Address, bool> = Map::new(&env);
        for voter in voters.iter() {
            if seen.contains_key(voter.clone()) || Self::is_voter(env.clone(), voter.clone()) {
                return Err(GovError::AlreadyRegistered);
            }
            Self::check_eligible(&env, &voter)?;
            seen.set(voter, true);
        }

        for voter in voters.iter() {
            Self::append_voter(&env, &voter);
        }
        Ok(new_count)
    }

    pub fn is_voter(env: Env, voter: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Voter(voter))
            .unwrap_or(false)
    }

    pub fn voter_count(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::VoterCount)
            .unwrap_or(0)
    }

    pub fn voter_at(env: Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::VoterAt(index))
    }

    /// Addresses from offset to offset+limit (or end of list)
    pub fn voters(env: Env, offset: u32, limit: u32) -> Vec<Address> {
        let count = Self::voter_count(env.clone());
        let end = core::cmp::min(offset.saturating_add(limit), count);

        let mut out = Vec::new(&env);
        for i in offset..end {
            if let Some(voter) = Self::voter_at(env.clone(), i) {
                out.push_back(voter);
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Private mode: commitments
    // ------------------------------------------------------------------

    /// Register `commitment = H(secret)` for `owner` in the current epoch.
    /// One commitment per owner per epoch. Returns the leaf index.
    pub fn register_commitment(
        env: Env,
        owner: Address,
        commitment: U256,
    ) -> Result<u32, GovError> {
        require_allowed(&Self::roles(env.clone()), &owner, Operation::SelfService)?;
        field::validate_element(&env, &commitment)?;

        let epoch = Self::epoch(env.clone());
        let owner_key = DataKey::CommitmentOwner(epoch.number, owner.clone());
        if env.storage().persistent().has(&owner_key) {
            return Err(GovError::AlreadyRegistered);
        }
        if Self::is_commitment_registered(env.clone(), commitment.clone()) {
            return Err(GovError::CommitmentAlreadyRegistered);
        }
        let count = Self::commitment_count(env.clone());
        if count >= merkle::capacity(epoch.depth) {
            return Err(GovError::TreeFull);
        }
        Self::check_eligible(&env, &owner)?;

        let index = Self::append_commitment(&env, epoch.number, &commitment);
        env.storage().persistent().set(&owner_key, &index);
        Ok(index)
    }

    /// Register a batch of commitments (admin only, all or nothing).
    /// Returns the new commitment count.
    pub fn batch_register_commitments(
        env: Env,
        caller: Address,
        commitments: Vec<U256>,
    ) -> Result<u32, GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::BatchRegister)?;
        Self::check_batch_size(commitments.len())?;

        let epoch = Self::epoch(env.clone());
        let count = Self::commitment_count(env.clone());
        let new_count = count
            .checked_add(commitments.len())
            .ok_or(GovError::Overflow)?;
        if new_count > merkle::capacity(epoch.depth) {
            return Err(GovError::TreeFull);
        }

        let mut seen: Map<U256, bool> = Map::new(&env);
        for commitment in commitments.iter() {
            field::validate_element(&env, &commitment)?;
            if seen.contains_key(commitment.clone())
                || Self::is_commitment_registered(env.clone(), commitment.clone())
            {
                return Err(GovError::CommitmentAlreadyRegistered);
            }
            seen.set(commitment, true);
        }

        for commitment in commitments.iter() {
            Self::append_commitment(&env, epoch.number, &commitment);
        }
        Ok(new_count)
    }

    /// Number of commitments registered in the current epoch
    pub fn commitment_count(env: Env) -> u32 {
        let epoch = Self::epoch(env.clone());
        env.storage()
            .persistent()
            .get(&DataKey::CommitmentCount(epoch.number))
            .unwrap_or(0)
    }

    pub fn commitment_at(env: Env, index: u32) -> Option<U256> {
        let epoch = Self::epoch(env.clone());
        env.storage()
            .persistent()
            .get(&DataKey::Commitment(epoch.number, index))
    }

    /// Commitments from offset to offset+limit (or end of arena)
    pub fn commitments(env: Env, offset: u32, limit: u32) -> Vec<U256> {
        let count = Self::commitment_count(env.clone());
        let end = core::cmp::min(offset.saturating_add(limit), count);

        let mut out = Vec::new(&env);
        for i in offset..end {
            if let Some(commitment) = Self::commitment_at(env.clone(), i) {
                out.push_back(commitment);
            }
        }
        out
    }

    pub fn commitment_index(env: Env, commitment: U256) -> Option<u32> {
        let epoch = Self::epoch(env.clone());
        env.storage()
            .persistent()
            .get(&DataKey::CommitmentIndex(epoch.number, commitment))
    }

    pub fn is_commitment_registered(env: Env, commitment: U256) -> bool {
        let epoch = Self::epoch(env.clone());
        env.storage()
            .persistent()
            .has(&DataKey::CommitmentIndex(epoch.number, commitment))
    }

    // ------------------------------------------------------------------
    // Root rotation
    // ------------------------------------------------------------------

    /// Publish a new voter-set root covering the first `leaf_count`
    /// commitments of the current epoch. Root updater or admin only.
    pub fn update_voter_set_root(
        env: Env,
        caller: Address,
        new_root: U256,
        leaf_count: u32,
    ) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::UpdateRoot)?;
        field::assert_in_field(&env, &new_root)?;
        if leaf_count > Self::commitment_count(env.clone()) {
            return Err(GovError::LeafCountExceedsRegistry);
        }

        Self::store_root(&env, new_root, leaf_count);
        Ok(())
    }

    /// Compute the root over the whole current arena and publish it.
    /// Arenas above [`MAX_HASHED_LEAVES`] use `update_voter_set_root`.
    pub fn publish_computed_root(env: Env, caller: Address) -> Result<U256, GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::UpdateRoot)?;

        let leaves = Self::hashable_commitments(&env)?;
        let root = merkle::compute_root_with_zeros(&env, &leaves, &Self::zeros_for_epoch(&env))?;
        Self::store_root(&env, root.clone(), leaves.len());
        Ok(root)
    }

    /// The published root for the current epoch, if any.
    pub fn current_root(env: Env) -> Option<RootRecord> {
        let epoch = Self::epoch(env.clone());
        env.storage().persistent().get(&DataKey::Root(epoch.number))
    }

    /// Root over the current arena. Read-only; does not publish.
    pub fn computed_root(env: Env) -> Result<U256, GovError> {
        let leaves = Self::hashable_commitments(&env)?;
        merkle::compute_root_with_zeros(&env, &leaves, &Self::zeros_for_epoch(&env))
    }

    /// Inclusion proof for the commitment at `index` against the tree over
    /// the current arena.
    pub fn merkle_path(env: Env, index: u32) -> Result<MerkleProof, GovError> {
        let epoch = Self::epoch(env.clone());
        let leaves = Self::hashable_commitments(&env)?;
        merkle::merkle_proof(&env, &leaves, epoch.depth, index)
    }

    // ------------------------------------------------------------------
    // Epochs and administration
    // ------------------------------------------------------------------

    /// Start a new registration epoch with `depth` (admin only). Every
    /// commitment must be registered again; the published root is cleared.
    pub fn start_epoch(env: Env, caller: Address, depth: u32) -> Result<u32, GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::Administer)?;
        merkle::validate_depth(depth)?;

        let current = Self::epoch(env.clone());
        let number = current.number.checked_add(1).ok_or(GovError::Overflow)?;
        let epoch = Epoch {
            number,
            depth,
            started_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&EPOCH, &epoch);

        EpochStartedEvent {
            epoch: number,
            depth,
        }
        .publish(&env);
        Ok(number)
    }

    pub fn epoch(env: Env) -> Epoch {
        env.storage()
            .instance()
            .get(&EPOCH)
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

    /// Contract version for upgrade tracking.
    pub fn version(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&VERSION_KEY)
            .unwrap_or(VERSION)
    }

    // Internal helpers

    fn check_batch_size(len: u32) -> Result<(), GovError> {
        if len == 0 {
            return Err(GovError::EmptyBatch);
        }
        if len > MAX_BATCH {
            return Err(GovError::BatchTooLarge);
        }
        Ok(())
    }

    // Credential subsystem is optional; without one everybody is eligible
    fn check_eligible(env: &Env, subject: &Address) -> Result<(), GovError> {
        let Some(eligibility) = env.storage().instance().get::<_, Address>(&ELIGIBILITY) else {
            return Ok(());
        };
        let eligible: bool = env.invoke_contract(
            &eligibility,
            &Symbol::new(env, "is_eligible"),
            soroban_sdk::vec![env, subject.into_val(env)],
        );
        if !eligible {
            return Err(GovError::NotEligible);
        }
        Ok(())
    }

    fn append_voter(env: &Env, voter: &Address) -> u32 {
        let index = Self::voter_count(env.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Voter(voter.clone()), &true);
        env.storage()
            .persistent()
            .set(&DataKey::VoterAt(index), voter);
        env.storage()
            .persistent()
            .set(&DataKey::VoterCount, &(index + 1));

        VoterRegisteredEvent {
            voter: voter.clone(),
            index,
        }
        .publish(env);
        index
    }

    fn append_commitment(env: &Env, epoch: u32, commitment: &U256) -> u32 {
        let count_key = DataKey::CommitmentCount(epoch);
        let index: u32 = env.storage().persistent().get(&count_key).unwrap_or(0);

        env.storage()
            .persistent()
            .set(&DataKey::Commitment(epoch, index), commitment);
        env.storage()
            .persistent()
            .set(&DataKey::CommitmentIndex(epoch, commitment.clone()), &index);
        env.storage().persistent().set(&count_key, &(index + 1));

        CommitmentRegisteredEvent {
            epoch,
            commitment: commitment.clone(),
            index,
        }
        .publish(env);
        index
    }

    fn hashable_commitments(env: &Env) -> Result<Vec<U256>, GovError> {
        let count = Self::commitment_count(env.clone());
        if count > MAX_HASHED_LEAVES {
            return Err(GovError::ArenaTooLargeToHash);
        }
        Ok(Self::commitments(env.clone(), 0, count))
    }

    fn store_root(env: &Env, root: U256, leaf_count: u32) {
        let epoch = Self::epoch(env.clone());
        let record = RootRecord {
            root: root.clone(),
            leaf_count,
            epoch: epoch.number,
            updated_at: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Root(epoch.number), &record);

        RootUpdatedEvent {
            epoch: epoch.number,
            root,
            leaf_count,
        }
        .publish(env);
    }

    // Internal: Ensure zeros cache is initialized (zeros[0..=MAX_TREE_DEPTH])
    fn ensure_zeros_cache(env: &Env) {
        if env.storage().instance().has(&ZEROS_CACHE) {
            return;
        }
        let zeros = merkle::zero_hashes(env, MAX_TREE_DEPTH);
        env.storage().instance().set(&ZEROS_CACHE, &zeros);
    }

    // Internal: zeros[0..=depth] for the current epoch
    fn zeros_for_epoch(env: &Env) -> Vec<U256> {
        Self::ensure_zeros_cache(env);
        let depth = Self::epoch(env.clone()).depth;
        let zeros: Vec<U256> = env
            .storage()
            .instance()
            .get(&ZEROS_CACHE)
            .unwrap_or_else(|| merkle::zero_hashes(env, MAX_TREE_DEPTH));
        zeros.slice(0..depth + 1)
    }
}

// Test-only functions in separate contractimpl block
// This prevents the macro from generating references to these functions in production builds
#[cfg(any(test, feature = "testutils"))]
#[contractimpl]
impl VoterRegistry {
    /// Test helper: zero value at a specific tree level, used to check the
    /// cache matches the circuit's zero chain
    pub fn test_zero_at_level(env: Env, level: u32) -> U256 {
        Self::ensure_zeros_cache(&env);
        let zeros: Vec<U256> = env.storage().instance().get(&ZEROS_CACHE).unwrap();
        zeros.get(level).unwrap()
    }
}
