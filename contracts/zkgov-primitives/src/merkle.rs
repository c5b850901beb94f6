//! Fixed-depth binary Merkle tree over registered commitments.
//!
//! Leaves are right-padded with the zero element up to `2^depth`. Padding is
//! never materialized: an absent right sibling at level `l` is replaced by
//! `zeros[l]`, the root of an all-zero subtree of height `l`, which yields the
//! same root as hashing the fully padded tree.

use soroban_sdk::{contracttype, Env, Vec, U256};

use crate::{hash::hash_pair, GovError};

/// Protocol-wide default depth (2^20 = 1,048,576 leaves).
pub const TREE_DEPTH: u32 = 20;
pub const MAX_TREE_DEPTH: u32 = 20;

/// Inclusion proof for one leaf.
/// - `path_elements[i]` is the sibling hash at level i
/// - `path_indices[i]` is 0 if the node is a left child, 1 if right
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerkleProof {
    pub leaf_index: u32,
    pub path_elements: Vec<U256>,
    pub path_indices: Vec<u32>,
}

/// A published voter-set root and the prefix of the commitment arena it
/// covers. Written by the registry, snapshotted by proposals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootRecord {
    pub root: U256,
    pub leaf_count: u32,
    pub epoch: u32,
    pub updated_at: u64,
}

pub fn validate_depth(depth: u32) -> Result<(), GovError> {
    if depth == 0 || depth > MAX_TREE_DEPTH {
        return Err(GovError::InvalidDepth);
    }
    Ok(())
}

pub fn capacity(depth: u32) -> u32 {
    1u32 << depth
}

/// zeros[0] = 0, zeros[i+1] = H(zeros[i], zeros[i])
pub fn zero_hashes(env: &Env, depth: u32) -> Vec<U256> {
    let mut zeros = Vec::new(env);
    let mut current = U256::from_u32(env, 0);
    zeros.push_back(current.clone());
    for _ in 0..depth {
        current = hash_pair(env, &current, &current);
        zeros.push_back(current.clone());
    }
    zeros
}

pub fn compute_root(env: &Env, leaves: &Vec<U256>, depth: u32) -> Result<U256, GovError> {
    validate_depth(depth)?;
    compute_root_with_zeros(env, leaves, &zero_hashes(env, depth))
}

/// Same as [`compute_root`] with a precomputed zeros table; the depth is
/// `zeros.len() - 1`.
pub fn compute_root_with_zeros(
    env: &Env,
    leaves: &Vec<U256>,
    zeros: &Vec<U256>,
) -> Result<U256, GovError> {
    let depth = zeros.len().checked_sub(1).ok_or(GovError::InvalidDepth)?;
    validate_depth(depth)?;
    if leaves.len() > capacity(depth) {
        return Err(GovError::TreeFull);
    }

    let mut layer = leaves.clone();
    for level in 0..depth {
        if layer.is_empty() {
            break;
        }
        layer = next_level(env, &layer, &zeros.get_unchecked(level));
    }
    Ok(layer.get(0).unwrap_or_else(|| zeros.get_unchecked(depth)))
}

/// Build the inclusion proof for `leaves[index]`.
pub fn merkle_proof(
    env: &Env,
    leaves: &Vec<U256>,
    depth: u32,
    index: u32,
) -> Result<MerkleProof, GovError> {
    validate_depth(depth)?;
    if leaves.len() > capacity(depth) {
        return Err(GovError::TreeFull);
    }
    if index >= leaves.len() {
        return Err(GovError::LeafIndexOutOfBounds);
    }

    let zeros = zero_hashes(env, depth);
    let mut path_elements = Vec::new(env);
    let mut path_indices = Vec::new(env);
    let mut layer = leaves.clone();
    let mut current = index;

    for level in 0..depth {
        let zero = zeros.get_unchecked(level);
        let is_right = current % 2 == 1;
        let sibling_index = if is_right { current - 1 } else { current + 1 };
        // Missing sibling means it lies in the zero padding
        let sibling = layer.get(sibling_index).unwrap_or_else(|| zero.clone());

        path_elements.push_back(sibling);
        path_indices.push_back(if is_right { 1 } else { 0 });

        layer = next_level(env, &layer, &zero);
        current /= 2;
    }

    Ok(MerkleProof {
        leaf_index: index,
        path_elements,
        path_indices,
    })
}

/// Recompute the root from `leaf` and `proof` and compare against `root`.
pub fn verify_proof(env: &Env, leaf: &U256, proof: &MerkleProof, root: &U256) -> bool {
    if proof.path_elements.len() != proof.path_indices.len() {
        return false;
    }

    let mut current = leaf.clone();
    for i in 0..proof.path_elements.len() {
        let sibling = proof.path_elements.get_unchecked(i);
        current = match proof.path_indices.get_unchecked(i) {
            0 => hash_pair(env, &current, &sibling),
            1 => hash_pair(env, &sibling, &current),
            _ => return false,
        };
    }
    &current == root
}

fn next_level(env: &Env, layer: &Vec<U256>, zero: &U256) -> Vec<U256> {
    let mut next = Vec::new(env);
    let mut i = 0;
    while i < layer.len() {
        let left = layer.get_unchecked(i);
        let right = layer.get(i + 1).unwrap_or_else(|| zero.clone());
        next.push_back(hash_pair(env, &left, &right));
        i += 2;
    }
    next
}
