//! Driving port for project mutations.

use async_trait::async_trait;

use crate::domain::{Error, Principal, Project, ProjectName, WorkerId};

/// Request to create a project.
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub name: ProjectName,
    pub referring_employee_id: WorkerId,
}

/// Driving port for project write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectCommand: Send + Sync {
    /// Create a project referencing a project manager.
    ///
    /// Requires the `Admin` role; the referring worker must exist and hold
    /// exactly `ProjectManager` at this moment.
    async fn create_project(
        &self,
        principal: Principal,
        request: CreateProjectRequest,
    ) -> Result<Project, Error>;
}
