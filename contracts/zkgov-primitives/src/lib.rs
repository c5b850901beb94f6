//! # ZK Governance Primitives
//!
//! Shared building blocks for the governance contracts:
//!
//! - [`hash`]: domain hash `H`, Poseidon over the BN254 scalar field
//! - [`commitment`]: `commitment = H(secret)`, `nullifier = H(secret, proposalId)`
//! - [`merkle`]: fixed-depth membership tree, roots and inclusion proofs
//! - [`groth16`]: proof verification and the vote circuit's public signals
//! - [`field`]: scalar field bounds for every public value
//! - [`access`]: role policy evaluated by every mutating entry point
//! - [`error`]: the error taxonomy returned by all contracts
//!
//! ### BN254 Curve (alt_bn128)
//! - **Definition**: y² = x³ + 3 over 𝔽_p where p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
//! - **Scalar field order**: r = 21888242871839275222246405745257275088548364400416034343698204186575808495617

#![no_std]

pub mod access;
pub mod commitment;
pub mod error;
pub mod field;
pub mod groth16;
pub mod hash;
pub mod merkle;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use access::{allow, require_allowed, Operation, Roles};
pub use error::{ErrorKind, GovError};
pub use groth16::{Proof, PublicSignals, VerificationKey};
pub use merkle::{MerkleProof, RootRecord};
