//! Test fixtures for Groth16 verification without a circuit build.
//!
//! [`generator_vk`] uses the G2 generator for beta, gamma and delta and
//! `IC[i] = (i+1)·G1`. Against that key the pairing product collapses to
//! `e(-A + alpha + vk_x + C, G2)`, so with `A = alpha = G1` the proof with
//! `C = -vk_x` verifies for exactly the signals it was built for.

use soroban_sdk::{
    crypto::bn254::{Fr, G1Affine},
    BytesN, Env, Vec, U256,
};

use crate::groth16::{compute_vk_x, g1_negate, Proof, VerificationKey, EXPECTED_IC_LENGTH};

/// BN254 G1 generator: (1, 2)
pub fn g1_generator(env: &Env) -> BytesN<64> {
    let mut bytes = [0u8; 64];
    bytes[31] = 1; // x = 1
    bytes[63] = 2; // y = 2
    BytesN::from_array(env, &bytes)
}

/// BN254 G2 generator, EIP-197 order (x.c1, x.c0, y.c1, y.c0)
pub fn g2_generator(env: &Env) -> BytesN<128> {
    let bytes: [u8; 128] = [
        0x19, 0x8e, 0x93, 0x93, 0x92, 0x0d, 0x48, 0x3a, 0x72, 0x60, 0xbf, 0xb7,
        0x31, 0xfb, 0x5d, 0x25, 0xf1, 0xaa, 0x49, 0x33, 0x35, 0xa9, 0xe7, 0x12,
        0x97, 0xe4, 0x85, 0xb7, 0xae, 0xf3, 0x12, 0xc2, 0x18, 0x00, 0xde, 0xef,
        0x12, 0x1f, 0x1e, 0x76, 0x42, 0x6a, 0x00, 0x66, 0x5e, 0x5c, 0x44, 0x79,
        0x67, 0x43, 0x22, 0xd4, 0xf7, 0x5e, 0xda, 0xdd, 0x46, 0xde, 0xbd, 0x5c,
        0xd9, 0x92, 0xf6, 0xed, 0x09, 0x06, 0x89, 0xd0, 0x58, 0x5f, 0xf0, 0x75,
        0xec, 0x9e, 0x99, 0xad, 0x69, 0x0c, 0x33, 0x95, 0xbc, 0x4b, 0x31, 0x33,
        0x70, 0xb3, 0x8e, 0xf3, 0x55, 0xac, 0xda, 0xdc, 0xd1, 0x22, 0x97, 0x5b,
        0x12, 0xc8, 0x5e, 0xa5, 0xdb, 0x8c, 0x6d, 0xeb, 0x4a, 0xab, 0x71, 0x80,
        0x8d, 0xcb, 0x40, 0x8f, 0xe3, 0xd1, 0xe7, 0x69, 0x0c, 0x43, 0xd3, 0x7b,
        0x4c, 0xe6, 0xcc, 0x01, 0x66, 0xfa, 0x7d, 0xaa,
    ];
    BytesN::from_array(env, &bytes)
}

pub fn generator_vk(env: &Env) -> VerificationKey {
    let g1 = g1_generator(env);
    let g2 = g2_generator(env);

    let mut ic = Vec::new(env);
    for i in 0..EXPECTED_IC_LENGTH {
        let point = G1Affine::from_bytes(g1.clone()) * Fr::from(U256::from_u32(env, i + 1));
        ic.push_back(point.to_bytes());
    }

    VerificationKey {
        alpha: g1,
        beta: g2.clone(),
        gamma: g2.clone(),
        delta: g2,
        ic,
    }
}

/// Proof accepted by [`generator_vk`] for `pub_signals` and nothing else.
pub fn forge_proof(env: &Env, vk: &VerificationKey, pub_signals: &Vec<U256>) -> Proof {
    let vk_x = compute_vk_x(vk, pub_signals);
    Proof {
        a: vk.alpha.clone(),
        b: g2_generator(env),
        c: g1_negate(env, &vk_x),
    }
}
