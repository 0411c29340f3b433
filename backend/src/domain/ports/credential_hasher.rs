//! Port for the external credential-hashing collaborator.
//!
//! Hashing algorithms and parameters are outside this core; the sign-up
//! workflow only needs an opaque hash to hand to the worker store.

use crate::domain::CredentialHash;

/// Errors raised by credential hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialHasherError {
    /// The hashing backend failed.
    #[error("credential hashing failed: {message}")]
    Hashing { message: String },
}

impl CredentialHasherError {
    /// Create a hashing error with the given message.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }
}

/// Driven port turning a raw secret into a storable credential hash.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash the supplied secret.
    fn hash(&self, secret: &str) -> Result<CredentialHash, CredentialHasherError>;
}

/// Fixture hasher for tests and unwired deployments.
///
/// Prefixes instead of hashing; never use where real credentials are stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialHasher;

impl CredentialHasher for FixtureCredentialHasher {
    fn hash(&self, secret: &str) -> Result<CredentialHash, CredentialHasherError> {
        Ok(CredentialHash::new(format!("fixture${secret}")))
    }
}
