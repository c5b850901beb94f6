//! Groth16 verification over BN254 (alt_bn128).
//!
//! The verification equation is
//! `e(-A, B) * e(alpha, beta) * e(vk_x, gamma) * e(C, delta) = 1`
//! with `vk_x = IC[0] + sum(signal[i] * IC[i+1])`, checked with the Soroban
//! BN254 host functions. Points use the big-endian (EIP-196/197) encoding
//! produced by snarkjs exports.
//!
//! The vote circuit proves: there is a secret `s` and a leaf index `i` with
//! `H(s)` at leaf `i` of the tree with root `root`, `nullifier = H(s,
//! proposalId)` and `voteChoice` in {0, 1}.

use soroban_sdk::{
    contracttype,
    crypto::bn254::{Fr, G1Affine, G2Affine},
    Bytes, BytesN, Env, Vec, U256,
};

use crate::{commitment::proposal_signal, field, GovError};

/// Public signals: [root, proposalId, voteChoice, nullifier]
pub const PUBLIC_SIGNAL_COUNT: u32 = 4;
/// IC vector = one point per public signal + IC[0]
pub const EXPECTED_IC_LENGTH: u32 = PUBLIC_SIGNAL_COUNT + 1;

/// BN254 base field modulus (Fq) in big-endian bytes
/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
const BN254_FQ_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Groth16 Verification Key for BN254
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationKey {
    pub alpha: BytesN<64>,   // G1 point
    pub beta: BytesN<128>,   // G2 point
    pub gamma: BytesN<128>,  // G2 point
    pub delta: BytesN<128>,  // G2 point
    pub ic: Vec<BytesN<64>>, // IC points (G1)
}

/// Groth16 Proof
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub a: BytesN<64>,  // G1 point
    pub b: BytesN<128>, // G2 point
    pub c: BytesN<64>,  // G1 point
}

/// Typed view of the vote circuit's public signals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicSignals {
    pub root: U256,
    pub proposal_id: U256,
    pub vote_choice: U256,
    pub nullifier: U256,
}

impl PublicSignals {
    pub fn new(env: &Env, root: U256, proposal_id: u64, vote_choice: u32, nullifier: U256) -> Self {
        Self {
            root,
            proposal_id: proposal_signal(env, proposal_id),
            vote_choice: U256::from_u32(env, vote_choice),
            nullifier,
        }
    }

    pub fn from_vec(signals: &Vec<U256>) -> Result<Self, GovError> {
        if signals.len() != PUBLIC_SIGNAL_COUNT {
            return Err(GovError::SignalCountMismatch);
        }
        Ok(Self {
            root: signals.get_unchecked(0),
            proposal_id: signals.get_unchecked(1),
            vote_choice: signals.get_unchecked(2),
            nullifier: signals.get_unchecked(3),
        })
    }

    pub fn to_vec(&self, env: &Env) -> Vec<U256> {
        soroban_sdk::vec![
            env,
            self.root.clone(),
            self.proposal_id.clone(),
            self.vote_choice.clone(),
            self.nullifier.clone()
        ]
    }
}

/// Only the IC length is checked here. Malformed points make the pairing
/// check fail, which rejects every proof against the key.
pub fn validate_vk(vk: &VerificationKey) -> Result<(), GovError> {
    if vk.ic.len() != EXPECTED_IC_LENGTH {
        return Err(GovError::InvalidVerificationKey);
    }
    Ok(())
}

/// SHA256 over the serialized key, used to pin a key for a proposal's lifetime.
pub fn hash_vk(env: &Env, vk: &VerificationKey) -> BytesN<32> {
    let mut data = Bytes::new(env);
    data.append(&Bytes::from_array(env, &vk.alpha.to_array()));
    data.append(&Bytes::from_array(env, &vk.beta.to_array()));
    data.append(&Bytes::from_array(env, &vk.gamma.to_array()));
    data.append(&Bytes::from_array(env, &vk.delta.to_array()));
    for point in vk.ic.iter() {
        data.append(&Bytes::from_array(env, &point.to_array()));
    }
    env.crypto().sha256(&data).into()
}

/// Verify a Groth16 proof. Returns false for a signal count that does not
/// match the key or any signal outside the scalar field.
pub fn verify_groth16(
    env: &Env,
    vk: &VerificationKey,
    proof: &Proof,
    pub_signals: &Vec<U256>,
) -> bool {
    if pub_signals.len() + 1 != vk.ic.len() {
        return false;
    }
    if pub_signals.iter().any(|s| !field::is_in_field(env, &s)) {
        return false;
    }

    let vk_x = compute_vk_x(vk, pub_signals);
    let neg_a = g1_negate(env, &proof.a);

    let mut g1_vec = Vec::new(env);
    g1_vec.push_back(G1Affine::from_bytes(neg_a));
    g1_vec.push_back(G1Affine::from_bytes(vk.alpha.clone()));
    g1_vec.push_back(G1Affine::from_bytes(vk_x));
    g1_vec.push_back(G1Affine::from_bytes(proof.c.clone()));

    let mut g2_vec = Vec::new(env);
    g2_vec.push_back(G2Affine::from_bytes(proof.b.clone()));
    g2_vec.push_back(G2Affine::from_bytes(vk.beta.clone()));
    g2_vec.push_back(G2Affine::from_bytes(vk.gamma.clone()));
    g2_vec.push_back(G2Affine::from_bytes(vk.delta.clone()));

    env.crypto().bn254().pairing_check(g1_vec, g2_vec)
}

/// `IC[0] + sum(signal[i] * IC[i+1])`. Caller checks the IC length.
pub fn compute_vk_x(vk: &VerificationKey, pub_signals: &Vec<U256>) -> BytesN<64> {
    let mut vk_x = G1Affine::from_bytes(vk.ic.get_unchecked(0));
    for (i, signal) in pub_signals.iter().enumerate() {
        let ic_point = G1Affine::from_bytes(vk.ic.get_unchecked(i as u32 + 1));
        vk_x = vk_x + ic_point * Fr::from(signal);
    }
    vk_x.to_bytes()
}

/// -P = (x, p - y). The point at infinity is encoded as all zeros and is its
/// own negation.
pub fn g1_negate(env: &Env, point: &BytesN<64>) -> BytesN<64> {
    let bytes = point.to_array();
    let mut result = bytes;

    let mut y = [0u8; 32];
    y.copy_from_slice(&bytes[32..64]);
    if y != [0u8; 32] {
        result[32..64].copy_from_slice(&sub_be(&BN254_FQ_MODULUS, &y));
    }

    BytesN::from_array(env, &result)
}

/// a - b for 256-bit big-endian integers, a >= b.
fn sub_be(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let diff = i16::from(a[i]) - i16::from(b[i]) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }
    result
}
