use soroban_sdk::contracterror;

/// Error category a [`GovError`] belongs to.
///
/// Callers only need the kind to decide what went wrong; the numeric code of
/// the variant narrows it down further.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    Validation,
    Authorization,
    State,
    Duplicate,
    Proof,
    Consistency,
    Parameter,
}

/// Errors shared by every governance contract.
///
/// Codes are grouped by kind: 1-19 validation, 20-29 authorization,
/// 30-39 state, 40-49 duplicate, 50-59 proof, 60-69 consistency,
/// 70-79 parameter, 80-89 capacity (validation). Codes are part of the
/// public interface and never reused.
#[contracterror]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GovError {
    EmptyTitle = 1,
    EmptyDescription = 2,
    TitleTooLong = 3,
    DescriptionTooLong = 4,
    ZeroDuration = 5,
    /// Public signal, root or commitment >= BN254 scalar field modulus
    SignalNotInField = 6,
    /// Nullifier is zero
    InvalidNullifier = 7,
    /// Commitment or secret is zero
    InvalidFieldElement = 8,
    BatchLengthMismatch = 9,
    EmptyBatch = 10,
    BatchTooLarge = 11,
    InvalidDepth = 12,
    TreeFull = 13,
    LeafIndexOutOfBounds = 14,
    ReputationOutOfRange = 15,
    /// Private votes only carry yes (1) or no (0)
    InvalidVoteChoice = 16,
    Overflow = 17,
    SignalCountMismatch = 18,
    InvalidVerificationKey = 19,

    Unauthorized = 20,
    NotRegisteredVoter = 21,
    NotEligible = 22,
    BelowProposalThreshold = 23,
    BelowVotingThreshold = 24,
    NoVotingPower = 25,

    ProposalNotFound = 30,
    NotPending = 31,
    NotActive = 32,
    VotingNotStarted = 33,
    VotingClosed = 34,
    DeadlineNotReached = 35,
    AlreadyInitialized = 36,
    VerificationKeyNotSet = 37,
    WrongVoteMode = 38,
    NotInitialized = 39,

    AlreadyRegistered = 40,
    CommitmentAlreadyRegistered = 41,
    AlreadyVoted = 42,
    NullifierSpent = 43,

    InvalidProof = 50,

    RootMismatch = 60,
    SignalMismatch = 61,
    LeafCountExceedsRegistry = 62,
    RootNotSet = 63,
    VerificationKeyChanged = 64,

    WeightBpsSum = 70,
    InvalidRepScale = 71,
    InvalidQuorum = 72,
    InvalidPrivateWeight = 73,
    // Capacity
    VoterSetFull = 80,
    ArenaTooLargeToHash = 81,
}

impl GovError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=19 | 80..=89 => ErrorKind::Validation,
            20..=29 => ErrorKind::Authorization,
            30..=39 => ErrorKind::State,
            40..=49 => ErrorKind::Duplicate,
            50..=59 => ErrorKind::Proof,
            60..=69 => ErrorKind::Consistency,
            _ => ErrorKind::Parameter,
        }
    }

    /// Human readable reason, stable enough to show to end users.
    pub fn reason(&self) -> &'static str {
        match self {
            GovError::EmptyTitle => "title must not be empty",
            GovError::EmptyDescription => "description must not be empty",
            GovError::TitleTooLong => "title too long",
            GovError::DescriptionTooLong => "description too long",
            GovError::ZeroDuration => "voting period must be non-zero",
            GovError::SignalNotInField => "value is not a BN254 scalar field element",
            GovError::InvalidNullifier => "nullifier must be non-zero",
            GovError::InvalidFieldElement => "field element must be non-zero",
            GovError::BatchLengthMismatch => "batch arrays have different lengths",
            GovError::EmptyBatch => "batch is empty",
            GovError::BatchTooLarge => "batch too large",
            GovError::InvalidDepth => "invalid tree depth",
            GovError::TreeFull => "tree is full",
            GovError::LeafIndexOutOfBounds => "leaf index out of bounds",
            GovError::ReputationOutOfRange => "reputation score out of range",
            GovError::InvalidVoteChoice => "private votes must be yes or no",
            GovError::Overflow => "arithmetic overflow",
            GovError::SignalCountMismatch => "wrong number of public signals",
            GovError::InvalidVerificationKey => "verification key has wrong IC length",
            GovError::Unauthorized => "caller lacks the required role",
            GovError::NotRegisteredVoter => "caller is not a registered voter",
            GovError::NotEligible => "subject is not eligible to register",
            GovError::BelowProposalThreshold => "proposer weight below proposal threshold",
            GovError::BelowVotingThreshold => "voter below proposal minimum thresholds",
            GovError::NoVotingPower => "voter has zero weight",
            GovError::ProposalNotFound => "proposal not found",
            GovError::NotPending => "proposal is not pending",
            GovError::NotActive => "proposal is not active",
            GovError::VotingNotStarted => "voting start time not reached",
            GovError::VotingClosed => "voting deadline passed",
            GovError::DeadlineNotReached => "voting deadline not reached",
            GovError::AlreadyInitialized => "contract already initialized",
            GovError::VerificationKeyNotSet => "verification key not set",
            GovError::WrongVoteMode => "operation does not match proposal vote mode",
            GovError::NotInitialized => "contract not initialized",
            GovError::AlreadyRegistered => "voter already registered",
            GovError::CommitmentAlreadyRegistered => "commitment already registered",
            GovError::AlreadyVoted => "voter already voted on this proposal",
            GovError::NullifierSpent => "nullifier already spent for this proposal",
            GovError::InvalidProof => "proof failed verification",
            GovError::RootMismatch => "root does not match proposal snapshot",
            GovError::SignalMismatch => "public signals do not match call arguments",
            GovError::LeafCountExceedsRegistry => "leaf count exceeds registered commitments",
            GovError::RootNotSet => "voter set root not published",
            GovError::VerificationKeyChanged => "verification key changed since proposal creation",
            GovError::WeightBpsSum => "weight basis points must sum to 10000",
            GovError::InvalidRepScale => "reputation scale must be positive",
            GovError::InvalidQuorum => "quorum percentage must be at most 100",
            GovError::InvalidPrivateWeight => "private vote weight must be positive",
            GovError::VoterSetFull => "voter set is at capacity",
            GovError::ArenaTooLargeToHash => "arena too large to hash on-chain",
        }
    }
}
