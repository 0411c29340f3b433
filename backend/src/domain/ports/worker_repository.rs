//! Port abstraction for worker persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Worker, WorkerId, WorkerWithCredential};

/// Persistence errors raised by worker repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkerRepositoryError {
    /// Repository connection could not be established.
    #[error("worker repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("worker repository query failed: {message}")]
    Query { message: String },
    /// Insert violated the username or email uniqueness constraint.
    #[error("worker uniqueness violated: {constraint}")]
    Duplicate { constraint: String },
}

impl WorkerRepositoryError {
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

    /// Create a duplicate error naming the violated constraint.
    pub fn duplicate(constraint: impl Into<String>) -> Self {
        Self::Duplicate {
            constraint: constraint.into(),
        }
    }
}

/// Driven port for worker storage.
///
/// The credential-free and credential-bearing fetches are distinct
/// operations so the credential-exposing path stays auditable; only the
/// external authentication collaborator may use the latter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    /// Persist a new worker together with its credential hash.
    async fn insert(&self, record: &WorkerWithCredential) -> Result<(), WorkerRepositoryError>;

    /// Fetch a worker by identifier, without credential material.
    async fn find_by_id(&self, id: WorkerId) -> Result<Option<Worker>, WorkerRepositoryError>;

    /// Fetch a worker by email address, without credential material.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Worker>, WorkerRepositoryError>;

    /// Credential-bearing fetch, reserved for the authentication
    /// collaborator.
    async fn find_by_id_with_credential(
        &self,
        id: WorkerId,
    ) -> Result<Option<WorkerWithCredential>, WorkerRepositoryError>;

    /// List every registered worker, without credential material.
    async fn list_all(&self) -> Result<Vec<Worker>, WorkerRepositoryError>;
}
