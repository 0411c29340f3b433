//! Port abstraction for project persistence adapters and their errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Project, WorkerId};

/// Persistence errors raised by project repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// Repository connection could not be established.
    #[error("project repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("project repository query failed: {message}")]
    Query { message: String },
}

impl ProjectRepositoryError {
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

/// Driven port for project storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a new project.
    async fn insert(&self, project: &Project) -> Result<(), ProjectRepositoryError>;

    /// Fetch a project by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Fetch a project by identifier, restricted to projects the worker is
    /// assigned to. A project outside that set reads as absent.
    async fn find_for_worker(
        &self,
        worker_id: WorkerId,
        id: Uuid,
    ) -> Result<Option<Project>, ProjectRepositoryError>;

    /// List every project.
    async fn list_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// List the projects the worker is assigned to.
    async fn list_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<Project>, ProjectRepositoryError>;
}
