//! # Proof Verifier
//!
//! Holds the Groth16 verification key for the vote circuit and checks
//! proofs against it. The governance contract snapshots [`vk_hash`] when a
//! private proposal is created and rejects votes once the key changes.
//!
//! Point validation is left to the BN254 host functions: a key with a
//! malformed point can be stored, but then no proof verifies against it.
//!
//! [`vk_hash`]: ProofVerifier::vk_hash

#![no_std]
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, BytesN, Env, Symbol, Vec,
    U256,
};
use zkgov_primitives::{
    groth16::{self, Proof, VerificationKey, PUBLIC_SIGNAL_COUNT},
    require_allowed, GovError, Operation, Roles,
};

const ROLES: Symbol = symbol_short!("roles");
const VK: Symbol = symbol_short!("vk");
const VK_VERSION: Symbol = symbol_short!("vk_ver");
const VERSION: u32 = 1;
const VERSION_KEY: Symbol = symbol_short!("ver");

#[soroban_sdk::contractevent]
#[derive(Clone, Debug, PartialEq)]
pub struct VKSetEvent {
    #[topic]
    pub vk_version: u32,
    pub vk_hash: BytesN<32>,
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
pub struct ProofVerifier;

#[contractimpl]
impl ProofVerifier {
    /// Constructor: only `roles.admin` matters here, it installs keys.
    pub fn __constructor(env: Env, roles: Roles) {
        if env.storage().instance().has(&VERSION_KEY) {
            panic_with_error!(&env, GovError::AlreadyInitialized);
        }
        env.storage().instance().set(&VERSION_KEY, &VERSION);
        env.storage().instance().set(&ROLES, &roles);

        ContractUpgraded {
            from: 0,
            to: VERSION,
        }
        .publish(&env);
    }

    /// Install or replace the verification key (admin only).
    /// The IC vector must hold exactly one point per public signal plus one.
    pub fn set_vk(env: Env, caller: Address, vk: VerificationKey) -> Result<(), GovError> {
        require_allowed(&Self::roles(env.clone()), &caller, Operation::Administer)?;
        groth16::validate_vk(&vk)?;

        let vk_version: u32 = env
            .storage()
            .instance()
            .get::<_, u32>(&VK_VERSION)
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(GovError::Overflow)?;

        env.storage().instance().set(&VK, &vk);
        env.storage().instance().set(&VK_VERSION, &vk_version);

        VKSetEvent {
            vk_version,
            vk_hash: groth16::hash_vk(&env, &vk),
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_vk(env: Env) -> Result<VerificationKey, GovError> {
        env.storage()
            .instance()
            .get(&VK)
            .ok_or(GovError::VerificationKeyNotSet)
    }

    /// SHA256 of the current key.
    pub fn vk_hash(env: Env) -> Result<BytesN<32>, GovError> {
        let vk = Self::get_vk(env.clone())?;
        Ok(groth16::hash_vk(&env, &vk))
    }

    /// Number of keys installed so far; 0 before the first `set_vk`.
    pub fn vk_version(env: Env) -> u32 {
        env.storage().instance().get(&VK_VERSION).unwrap_or(0)
    }

    /// Check `proof` against the stored key. Signals are
    /// `[root, proposalId, voteChoice, nullifier]`.
    pub fn verify(env: Env, proof: Proof, public_signals: Vec<U256>) -> Result<bool, GovError> {
        if public_signals.len() != PUBLIC_SIGNAL_COUNT {
            return Err(GovError::SignalCountMismatch);
        }
        let vk = Self::get_vk(env.clone())?;
        Ok(groth16::verify_groth16(&env, &vk, &proof, &public_signals))
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

    pub fn version(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&VERSION_KEY)
            .unwrap_or(VERSION)
    }
}
