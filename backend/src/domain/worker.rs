//! Worker identity, role, and credential model.
//!
//! The credential hash never appears on [`Worker`]; only the explicitly
//! credential-bearing [`WorkerWithCredential`] carries it, so every ordinary
//! read path is credential-free by construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors returned by the worker constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerValidationError {
    EmptyUsername,
    UsernameTooLong { max: usize },
    EmptyEmail,
    MissingAtSign,
    UnknownRole { value: String },
}

impl fmt::Display for WorkerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::MissingAtSign => write!(f, "email must contain an '@' sign"),
            Self::UnknownRole { value } => {
                write!(f, "unknown role '{value}'")
            }
        }
    }
}

impl std::error::Error for WorkerValidationError {}

/// Stable worker identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct WorkerId(Uuid);

impl WorkerId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`WorkerId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorization role held by a worker.
///
/// New accounts default to `Employee`; the role is immutable after sign-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Regular worker; sees only records linked to their own id.
    #[default]
    Employee,
    /// Administrator; may create projects and assignments.
    Admin,
    /// Project manager; may be referenced by projects and create assignments.
    ProjectManager,
}

impl Role {
    /// Stable string form used in storage and tokens.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Admin => "Admin",
            Self::ProjectManager => "ProjectManager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = WorkerValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Employee" => Ok(Self::Employee),
            "Admin" => Ok(Self::Admin),
            "ProjectManager" => Ok(Self::ProjectManager),
            other => Err(WorkerValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 64;

/// Unique login name chosen at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    pub fn new(username: impl Into<String>) -> Result<Self, WorkerValidationError> {
        let username = username.into();
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(WorkerValidationError::EmptyUsername);
        }
        if normalized.chars().count() > USERNAME_MAX {
            return Err(WorkerValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Unique email address chosen at sign-up.
///
/// Validation is deliberately shallow: non-empty after trimming and contains
/// an `@`. Deliverability checks belong to outer layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, WorkerValidationError> {
        let email = email.into();
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(WorkerValidationError::EmptyEmail);
        }
        if !normalized.contains('@') {
            return Err(WorkerValidationError::MissingAtSign);
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Opaque credential hash produced by the external hashing collaborator.
///
/// The inner value is zeroised on drop and redacted from `Debug` output.
#[derive(Clone)]
pub struct CredentialHash(Zeroizing<String>);

impl CredentialHash {
    /// Wrap an already-hashed credential.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(Zeroizing::new(hash.into()))
    }

    /// Expose the hash for storage or verification.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

impl PartialEq for CredentialHash {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for CredentialHash {}

/// A registered worker, without credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    id: WorkerId,
    username: Username,
    email: EmailAddress,
    role: Role,
}

impl Worker {
    /// Build a [`Worker`] from validated components.
    pub const fn new(id: WorkerId, username: Username, email: EmailAddress, role: Role) -> Self {
        Self {
            id,
            username,
            email,
            role,
        }
    }

    /// Stable worker identifier.
    pub const fn id(&self) -> WorkerId {
        self.id
    }

    /// Unique login name.
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Authorization role.
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Credential-bearing worker record.
///
/// Only the worker store's explicit credential fetch and the sign-up insert
/// handle this type; everything else works with [`Worker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerWithCredential {
    worker: Worker,
    credential: CredentialHash,
}

impl WorkerWithCredential {
    /// Pair a worker with its credential hash.
    pub const fn new(worker: Worker, credential: CredentialHash) -> Self {
        Self { worker, credential }
    }

    /// The credential-free worker view.
    pub const fn worker(&self) -> &Worker {
        &self.worker
    }

    /// The stored credential hash.
    pub const fn credential(&self) -> &CredentialHash {
        &self.credential
    }

    /// Drop the credential and keep the plain worker.
    pub fn into_worker(self) -> Worker {
        self.worker
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", WorkerValidationError::EmptyUsername)]
    #[case("   ", WorkerValidationError::EmptyUsername)]
    fn username_rejects_blank_input(#[case] raw: &str, #[case] expected: WorkerValidationError) {
        let err = Username::new(raw).expect_err("blank usernames must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn username_trims_whitespace() {
        let username = Username::new("  ada  ").expect("valid username");
        assert_eq!(username.as_ref(), "ada");
    }

    #[rstest]
    fn username_enforces_maximum_length() {
        let raw = "a".repeat(USERNAME_MAX + 1);
        let err = Username::new(raw).expect_err("over-long username must fail");
        assert_eq!(err, WorkerValidationError::UsernameTooLong { max: USERNAME_MAX });
    }

    #[rstest]
    #[case("", WorkerValidationError::EmptyEmail)]
    #[case("not-an-email", WorkerValidationError::MissingAtSign)]
    fn email_rejects_invalid_input(#[case] raw: &str, #[case] expected: WorkerValidationError) {
        let err = EmailAddress::new(raw).expect_err("invalid email must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("Employee", Role::Employee)]
    #[case("Admin", Role::Admin)]
    #[case("ProjectManager", Role::ProjectManager)]
    fn role_round_trips_through_strings(#[case] raw: &str, #[case] expected: Role) {
        let role: Role = raw.parse().expect("known role");
        assert_eq!(role, expected);
        assert_eq!(role.as_str(), raw);
    }

    #[rstest]
    fn role_defaults_to_employee() {
        assert_eq!(Role::default(), Role::Employee);
    }

    #[rstest]
    fn unknown_role_is_rejected() {
        let err = "Superuser".parse::<Role>().expect_err("unknown role");
        assert_eq!(
            err,
            WorkerValidationError::UnknownRole {
                value: "Superuser".to_owned()
            }
        );
    }

    #[rstest]
    fn credential_hash_debug_is_redacted() {
        let hash = CredentialHash::new("very-secret-hash");
        let rendered = format!("{hash:?}");
        assert!(!rendered.contains("very-secret-hash"));
        assert!(rendered.contains("redacted"));
    }

    #[rstest]
    fn serialized_worker_has_no_credential_field() {
        let worker = Worker::new(
            WorkerId::random(),
            Username::new("ada").expect("username"),
            EmailAddress::new("ada@example.com").expect("email"),
            Role::Employee,
        );
        let json = serde_json::to_value(&worker).expect("worker serializes");
        let object = json.as_object().expect("worker is a JSON object");
        assert!(!object.contains_key("credential"));
        assert_eq!(object.get("role"), Some(&serde_json::json!("Employee")));
    }
}
