//! Driving port for assignment mutations.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Assignment, Error, Principal, WorkerId};

/// Request to assign a worker to a project over a closed date range.
#[derive(Debug, Clone, Copy)]
pub struct CreateAssignmentRequest {
    pub project_id: Uuid,
    pub worker_id: WorkerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Driving port for assignment write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentCommand: Send + Sync {
    /// Create an assignment after availability and existence checks.
    ///
    /// Requires the `Admin` or `ProjectManager` role. The availability check
    /// and the write are separate steps with no transaction spanning them;
    /// concurrent conflicting creates for the same worker can interleave.
    async fn create_assignment(
        &self,
        principal: Principal,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment, Error>;
}
