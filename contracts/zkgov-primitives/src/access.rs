//! Role-based authorization shared by all contracts.
//!
//! Every mutating entry point that has a caller runs
//! [`require_allowed`] before touching state.

use soroban_sdk::{contracttype, Address};

use crate::GovError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roles {
    pub admin: Address,
    /// Single writer of the published voter-set root
    pub root_updater: Address,
    /// Mutates reputation records
    pub reputation_updater: Address,
}

pub enum Operation<'a> {
    /// Roles, epochs, parameters and verification keys
    Administer,
    BatchRegister,
    UpdateRoot,
    UpdateReputation,
    /// Self-service actions where the caller acts on its own behalf
    SelfService,
    CancelProposal { proposer: &'a Address },
}

pub fn allow(roles: &Roles, caller: &Address, op: &Operation) -> bool {
    let is_admin = caller == &roles.admin;
    match op {
        Operation::Administer | Operation::BatchRegister => is_admin,
        Operation::UpdateRoot => is_admin || caller == &roles.root_updater,
        Operation::UpdateReputation => is_admin || caller == &roles.reputation_updater,
        Operation::SelfService => true,
        Operation::CancelProposal { proposer } => is_admin || caller == *proposer,
    }
}

/// `caller.require_auth()` followed by the policy check.
pub fn require_allowed(roles: &Roles, caller: &Address, op: Operation) -> Result<(), GovError> {
    caller.require_auth();
    if !allow(roles, caller, &op) {
        return Err(GovError::Unauthorized);
    }
    Ok(())
}
