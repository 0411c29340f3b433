//! Driving port for assignment queries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Assignment, Error, Principal};

/// Driving port for assignment read operations.
///
/// Both operations apply the visibility scope: employees see only their own
/// rows, and an unowned row surfaces the same `AssignmentNotFound` as a
/// missing one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentQuery: Send + Sync {
    /// List the assignments visible to the principal.
    async fn list_assignments(&self, principal: Principal) -> Result<Vec<Assignment>, Error>;

    /// Fetch one assignment visible to the principal.
    async fn get_assignment(&self, principal: Principal, id: Uuid) -> Result<Assignment, Error>;
}
