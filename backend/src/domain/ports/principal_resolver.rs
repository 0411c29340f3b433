//! Port for the external authentication collaborator.
//!
//! Token issuance and verification live outside this core; the inbound
//! adapter only needs a bearer token resolved into a [`Principal`] before a
//! core operation runs.

use async_trait::async_trait;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{Principal, Role, WorkerId};

/// Errors raised by principal resolution adapters.
///
/// These are infrastructure faults; a token that simply does not resolve is
/// reported as `Ok(None)`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrincipalResolverError {
    /// The verification backend failed.
    #[error("principal resolution failed: {message}")]
    Verification { message: String },
}

impl PrincipalResolverError {
    /// Create a verification error with the given message.
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }
}

/// Driven port resolving a bearer token into the calling principal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    /// Resolve `token` into a principal, or `None` when it does not verify.
    async fn resolve(&self, token: &str) -> Result<Option<Principal>, PrincipalResolverError>;
}

/// Fixture resolver for tests and unwired deployments.
///
/// Accepts tokens of the form `<worker-uuid>:<Role>` and resolves them
/// directly; anything else fails to resolve. Never use where real
/// authentication is required.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePrincipalResolver;

#[async_trait]
impl PrincipalResolver for FixturePrincipalResolver {
    async fn resolve(&self, token: &str) -> Result<Option<Principal>, PrincipalResolverError> {
        let Some((id, role)) = token.split_once(':') else {
            return Ok(None);
        };
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let Ok(role) = Role::from_str(role) else {
            return Ok(None);
        };
        Ok(Some(Principal::new(WorkerId::from_uuid(id), role)))
    }
}
