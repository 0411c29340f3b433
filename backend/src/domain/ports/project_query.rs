//! Driving port for project queries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Principal, Project};

/// Driving port for project read operations.
///
/// Both operations apply the visibility scope: employees see only projects
/// they are assigned to, and a project outside that scope surfaces the same
/// `ProjectNotFound` as a missing one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// List the projects visible to the principal.
    async fn list_projects(&self, principal: Principal) -> Result<Vec<Project>, Error>;

    /// Fetch one project visible to the principal.
    async fn get_project(&self, principal: Principal, id: Uuid) -> Result<Project, Error>;
}
