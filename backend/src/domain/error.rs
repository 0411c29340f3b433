//! Domain-level error payload.
//!
//! Transport agnostic: inbound adapters map the stable [`ErrorCode`] to
//! status codes and redact infrastructure causes before anything leaves the
//! process. Composed workflows forward an error unchanged when its code
//! already belongs to their contract and wrap anything else as a store or
//! unknown failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// The requested worker does not exist.
    WorkerNotFound,
    /// The requested project does not exist (or is outside the caller's
    /// scope, indistinguishably).
    ProjectNotFound,
    /// The requested assignment does not exist (or is outside the caller's
    /// scope, indistinguishably).
    AssignmentNotFound,
    /// A worker with the same username or email already exists.
    WorkerAlreadyExists,
    /// The worker already holds a conflicting assignment.
    WorkerNotAvailable,
    /// The caller's or referenced worker's role does not permit the
    /// operation.
    RoleNotAllowed,
    /// A persistence failure; the cause stays in the message for logs.
    Store,
    /// An unexpected failure outside the known categories.
    Unknown,
}

impl ErrorCode {
    /// Whether the failure is an infrastructure fault whose message must be
    /// redacted before reaching a client.
    pub const fn is_infrastructure(self) -> bool {
        matches!(self, Self::Store | Self::Unknown)
    }
}

/// Domain error payload carried by every fallible core operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message; for infrastructure codes this may contain
    /// diagnostic detail not intended for clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details for adapters.
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::WorkerNotFound`].
    pub fn worker_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::WorkerNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ProjectNotFound`].
    pub fn project_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProjectNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::AssignmentNotFound`].
    pub fn assignment_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AssignmentNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::WorkerAlreadyExists`].
    pub fn worker_already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::WorkerAlreadyExists, message)
    }

    /// Convenience constructor for [`ErrorCode::WorkerNotAvailable`].
    pub fn worker_not_available(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::WorkerNotAvailable, message)
    }

    /// Convenience constructor for [`ErrorCode::RoleNotAllowed`].
    pub fn role_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RoleNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::Store`].
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Store, message)
    }

    /// Convenience constructor for [`ErrorCode::Unknown`].
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
