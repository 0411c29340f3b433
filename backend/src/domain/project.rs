//! Project entity.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::WorkerId;

/// Maximum allowed length for a project name.
pub const PROJECT_NAME_MAX: usize = 120;

/// Validation errors returned by [`ProjectName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyName,
    NameTooLong { max: usize },
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "project name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "project name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for ProjectValidationError {}

/// Human-readable project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and construct a [`ProjectName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectValidationError> {
        let name = name.into();
        let normalized = name.trim();
        if normalized.is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        if normalized.chars().count() > PROJECT_NAME_MAX {
            return Err(ProjectValidationError::NameTooLong {
                max: PROJECT_NAME_MAX,
            });
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A unit of work referencing a project manager as its referring worker.
///
/// ## Invariants
/// - `referring_employee_id` referenced a worker holding `ProjectManager` at
///   the moment the project was created; no later re-validation happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: Uuid,
    name: ProjectName,
    referring_employee_id: WorkerId,
}

impl Project {
    /// Build a [`Project`] from validated components.
    pub const fn new(id: Uuid, name: ProjectName, referring_employee_id: WorkerId) -> Self {
        Self {
            id,
            name,
            referring_employee_id,
        }
    }

    /// Stable project identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Project name.
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Worker who holds the `ProjectManager` role for this project.
    pub const fn referring_employee_id(&self) -> WorkerId {
        self.referring_employee_id
    }
}
