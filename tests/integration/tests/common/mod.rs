// Shared harness for the integration tests: the three contracts wired
// together against a Stellar asset contract, exactly as they would be
// deployed.

#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _, testutils::Ledger, token::StellarAssetClient, Address, Bytes, BytesN,
    Env, String, Vec, U256,
};

use governance::{GovernanceClient, GovernanceConfig, VoteChoice, VoteMode, WeightParameters};
use proof_verifier::ProofVerifierClient;
use voter_registry::VoterRegistryClient;
use zkgov_primitives::{commitment, testutils, GovError, PublicSignals, Roles, VerificationKey};

pub const TOKEN_UNIT: i128 = 10_000_000;
pub const VOTING_DELAY: u64 = 60;
pub const VOTING_PERIOD: u64 = 3_600;
pub const QUORUM: u32 = 20;

pub fn hex_to_bytes<const N: usize>(env: &Env, hex: &str) -> BytesN<N> {
    let bytes = hex::decode(hex).expect("invalid hex");
    assert_eq!(bytes.len(), N, "hex string wrong length");
    BytesN::from_array(env, &bytes.try_into().unwrap())
}

pub fn hex_str_to_u256(env: &Env, hex: &str) -> U256 {
    let bytes = hex::decode(hex).expect("invalid hex");
    let mut padded = [0u8; 32];
    let start = 32 - bytes.len();
    padded[start..].copy_from_slice(&bytes);
    U256::from_be_bytes(env, &Bytes::from_array(env, &padded))
}

/// Decimal string (as snarkjs prints signals) to U256.
pub fn parse_u256(env: &Env, s: &str) -> U256 {
    let val = num_bigint::BigUint::parse_bytes(s.as_bytes(), 10).expect("invalid decimal");
    let mut bytes = [0u8; 32];
    let val_bytes = val.to_bytes_be();
    let start = 32 - val_bytes.len();
    bytes[start..].copy_from_slice(&val_bytes);
    U256::from_be_bytes(env, &Bytes::from_array(env, &bytes))
}

pub struct GovSystem {
    pub env: Env,
    pub roles: Roles,
    pub registry: Address,
    pub verifier: Address,
    pub token: Address,
    pub gov: Address,
    pub vk: VerificationKey,
}

impl GovSystem {
    /// Registry at `depth`, verifier holding the generator key, governance
    /// with an 80/20 token/reputation split.
    pub fn new(depth: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let roles = Roles {
            admin: Address::generate(&env),
            root_updater: Address::generate(&env),
            reputation_updater: Address::generate(&env),
        };

        let registry = env.register(
            voter_registry::VoterRegistry,
            (roles.clone(), depth, None::<Address>),
        );
        let verifier = env.register(proof_verifier::ProofVerifier, (roles.clone(),));
        let token = env
            .register_stellar_asset_contract_v2(roles.admin.clone())
            .address();

        let config = GovernanceConfig {
            voting_delay: VOTING_DELAY,
            voting_period: VOTING_PERIOD,
            proposal_threshold: 0,
            quorum_percentage: QUORUM,
            rep_scale: governance::weight::DEFAULT_REP_SCALE,
            private_vote_weight: 1,
        };
        let gov = env.register(
            governance::Governance,
            (
                roles.clone(),
                registry.clone(),
                token.clone(),
                verifier.clone(),
                config,
                WeightParameters::new(8000, 2000).unwrap(),
            ),
        );

        let vk = testutils::generator_vk(&env);
        ProofVerifierClient::new(&env, &verifier).set_vk(&roles.admin, &vk);

        Self {
            env,
            roles,
            registry,
            verifier,
            token,
            gov,
            vk,
        }
    }

    pub fn registry_client(&self) -> VoterRegistryClient<'_> {
        VoterRegistryClient::new(&self.env, &self.registry)
    }

    pub fn verifier_client(&self) -> ProofVerifierClient<'_> {
        ProofVerifierClient::new(&self.env, &self.verifier)
    }

    pub fn gov_client(&self) -> GovernanceClient<'_> {
        GovernanceClient::new(&self.env, &self.gov)
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }

    pub fn mint(&self, to: &Address, tokens: i128) {
        StellarAssetClient::new(&self.env, &self.token).mint(to, &(tokens * TOKEN_UNIT));
    }

    /// Registered address holding `tokens` whole tokens.
    pub fn public_voter(&self, tokens: i128) -> Address {
        let voter = Address::generate(&self.env);
        self.registry_client().register_voter(&voter);
        if tokens > 0 {
            self.mint(&voter, tokens);
        }
        voter
    }

    /// Register `H(secret)` for a fresh owner. Returns the leaf index.
    pub fn commit(&self, secret: u32) -> u32 {
        let owner = Address::generate(&self.env);
        let c = commitment::commitment(&self.env, &U256::from_u32(&self.env, secret));
        self.registry_client().register_commitment(&owner, &c)
    }

    pub fn publish_root(&self) -> U256 {
        self.registry_client()
            .publish_computed_root(&self.roles.root_updater)
    }

    pub fn submit(&self, proposer: &Address, mode: VoteMode) -> u64 {
        self.gov_client().submit_proposal(
            proposer,
            &String::from_str(&self.env, "Treasury grant"),
            &String::from_str(&self.env, "Grant 500 tokens to the tooling working group"),
            &0,
            &0,
            &mode,
        )
    }

    /// Submit now, advance to `voting_start` and open voting.
    pub fn open_proposal(&self, proposer: &Address, mode: VoteMode) -> u64 {
        let id = self.submit(proposer, mode);
        let start = self.gov_client().get_proposal(&id).voting_start;
        self.set_time(start);
        self.gov_client().start_voting(&id);
        id
    }

    /// Public signals and a proof that the generator key accepts for them.
    pub fn private_ballot(
        &self,
        proposal_id: u64,
        secret: u32,
        root: &U256,
        choice: u32,
    ) -> (U256, zkgov_primitives::Proof, Vec<U256>) {
        let env = &self.env;
        let nullifier = commitment::nullifier(env, &U256::from_u32(env, secret), proposal_id);
        let signals = PublicSignals::new(env, root.clone(), proposal_id, choice, nullifier.clone())
            .to_vec(env);
        let proof = testutils::forge_proof(env, &self.vk, &signals);
        (nullifier, proof, signals)
    }

    pub fn vote_private(
        &self,
        proposal_id: u64,
        secret: u32,
        root: &U256,
        support: VoteChoice,
    ) -> Result<(), GovError> {
        let choice = support.circuit_value()?;
        let (nullifier, proof, signals) = self.private_ballot(proposal_id, secret, root, choice);
        match self
            .gov_client()
            .try_cast_private_vote(&proposal_id, &support, &nullifier, &proof, &signals)
        {
            Ok(_) => Ok(()),
            Err(Ok(e)) => Err(e),
            Err(Err(e)) => panic!("host error: {:?}", e),
        }
    }
}
