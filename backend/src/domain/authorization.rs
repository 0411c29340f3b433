//! Capability-based authorization policy.
//!
//! Two pure rules: a membership test deciding whether a principal's role may
//! perform an operation, and a scope rule restricting what a principal may
//! observe. Every core operation takes the principal as an explicit
//! argument; nothing here reads ambient request state.

use serde::{Deserialize, Serialize};

use crate::domain::{Role, WorkerId};

/// The authenticated caller of a core operation.
///
/// Resolved by an external authentication collaborator before any core
/// operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    worker_id: WorkerId,
    role: Role,
}

impl Principal {
    /// Pair an identity with its role.
    pub const fn new(worker_id: WorkerId, role: Role) -> Self {
        Self { worker_id, role }
    }

    /// The caller's worker identifier.
    pub const fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    /// The caller's role.
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Whether `role` belongs to the set of roles allowed to perform an
/// operation.
pub fn role_allowed(required: &[Role], role: Role) -> bool {
    required.contains(&role)
}

/// Visibility granted to a principal over assignments and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Admin and project managers see the unrestricted collection.
    Unrestricted,
    /// Employees see only records linked to their own id.
    OwnedBy(WorkerId),
}

impl Scope {
    /// Derive the visibility scope for a principal.
    pub const fn for_principal(principal: &Principal) -> Self {
        match principal.role() {
            Role::Employee => Self::OwnedBy(principal.worker_id()),
            Role::Admin | Role::ProjectManager => Self::Unrestricted,
        }
    }
}
