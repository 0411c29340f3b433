//! Port abstraction for assignment persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Assignment, DateInterval, WorkerId};

/// Persistence errors raised by assignment repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentRepositoryError {
    /// Repository connection could not be established.
    #[error("assignment repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("assignment repository query failed: {message}")]
    Query { message: String },
}

impl AssignmentRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port for assignment storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Persist a new assignment.
    async fn insert(&self, assignment: &Assignment) -> Result<(), AssignmentRepositoryError>;

    /// Fetch an assignment by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AssignmentRepositoryError>;

    /// Fetch an assignment by identifier, restricted to the worker's own
    /// rows. A row owned by someone else reads as absent.
    async fn find_for_worker(
        &self,
        worker_id: WorkerId,
        id: Uuid,
    ) -> Result<Option<Assignment>, AssignmentRepositoryError>;

    /// List every assignment.
    async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentRepositoryError>;

    /// List the worker's own assignments.
    async fn list_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<Assignment>, AssignmentRepositoryError>;

    /// List only the date intervals of the worker's assignments, as input
    /// to the availability check.
    async fn list_intervals_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<DateInterval>, AssignmentRepositoryError>;
}
