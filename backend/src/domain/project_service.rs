//! Project creation workflow and scoped project queries.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::authorization::{role_allowed, Scope};
use crate::domain::ports::{
    CreateProjectRequest, ProjectCommand, ProjectQuery, ProjectRepository, ProjectRepositoryError,
    WorkerRepository, WorkerRepositoryError,
};
use crate::domain::{Error, Principal, Project, Role};

fn map_worker_repository_error(error: WorkerRepositoryError) -> Error {
    Error::store(format!("worker store error: {error}"))
}

fn map_project_repository_error(error: ProjectRepositoryError) -> Error {
    match error {
        ProjectRepositoryError::Connection { message } => {
            Error::store(format!("project store unavailable: {message}"))
        }
        ProjectRepositoryError::Query { message } => {
            Error::store(format!("project store error: {message}"))
        }
    }
}

fn project_not_found(id: Uuid) -> Error {
    Error::project_not_found(format!("project {id} not found"))
}

/// Project service implementing the creation workflow and project queries.
#[derive(Clone)]
pub struct ProjectService<W, P> {
    workers: Arc<W>,
    projects: Arc<P>,
}

impl<W, P> ProjectService<W, P> {
    /// Create a new service over the worker and project stores.
    pub fn new(workers: Arc<W>, projects: Arc<P>) -> Self {
        Self { workers, projects }
    }
}

#[async_trait]
impl<W, P> ProjectCommand for ProjectService<W, P>
where
    W: WorkerRepository,
    P: ProjectRepository,
{
    async fn create_project(
        &self,
        principal: Principal,
        request: CreateProjectRequest,
    ) -> Result<Project, Error> {
        if !role_allowed(&[Role::Admin], principal.role()) {
            return Err(Error::role_not_allowed(
                "only administrators may create projects",
            ));
        }

        let referrer = self
            .workers
            .find_by_id(request.referring_employee_id)
            .await
            .map_err(map_worker_repository_error)?
            .ok_or_else(|| {
                Error::worker_not_found(format!(
                    "referring worker {} not found",
                    request.referring_employee_id
                ))
            })?;

        if referrer.role() != Role::ProjectManager {
            return Err(Error::role_not_allowed(
                "referring worker is not a project manager",
            ));
        }

        let project = Project::new(Uuid::new_v4(), request.name, referrer.id());
        self.projects
            .insert(&project)
            .await
            .map_err(map_project_repository_error)?;
        Ok(project)
    }
}

#[async_trait]
impl<W, P> ProjectQuery for ProjectService<W, P>
where
    W: WorkerRepository,
    P: ProjectRepository,
{
    async fn list_projects(&self, principal: Principal) -> Result<Vec<Project>, Error> {
        let listed = match Scope::for_principal(&principal) {
            Scope::Unrestricted => self.projects.list_all().await,
            Scope::OwnedBy(worker_id) => self.projects.list_for_worker(worker_id).await,
        };
        listed.map_err(map_project_repository_error)
    }

    async fn get_project(&self, principal: Principal, id: Uuid) -> Result<Project, Error> {
        let found = match Scope::for_principal(&principal) {
            Scope::Unrestricted => self.projects.find_by_id(id).await,
            Scope::OwnedBy(worker_id) => self.projects.find_for_worker(worker_id, id).await,
        };
        found
            .map_err(map_project_repository_error)?
            .ok_or_else(|| project_not_found(id))
    }
}

#[cfg(test)]
#[path = "project_service_tests.rs"]
mod tests;
