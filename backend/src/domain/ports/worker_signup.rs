//! Driving port for worker registration.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, Username, Worker};

/// Request to register a new worker.
///
/// The secret arrives raw and is hashed through the credential-hashing
/// collaborator before anything is stored.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub username: Username,
    pub email: EmailAddress,
    pub secret: String,
}

/// Driving port for creating worker accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerSignup: Send + Sync {
    /// Register a worker and return the credential-free record.
    ///
    /// Fails with `WorkerAlreadyExists` when the username or email is
    /// already taken.
    async fn sign_up(&self, request: SignUpRequest) -> Result<Worker, Error>;
}
