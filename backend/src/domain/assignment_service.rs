//! Assignment creation workflow and scoped assignment queries.
//!
//! Creation checks the worker's availability before writing, but the check
//! and the write are separate statements with no transaction or lock between
//! them. Two concurrent creates for the same worker can both observe the
//! pre-insert interval set and both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::authorization::{role_allowed, Scope};
use crate::domain::availability::is_available;
use crate::domain::ports::{
    AssignmentCommand, AssignmentQuery, AssignmentRepository, AssignmentRepositoryError,
    CreateAssignmentRequest, ProjectRepository, ProjectRepositoryError, WorkerRepository,
    WorkerRepositoryError,
};
use crate::domain::{Assignment, DateInterval, Error, Principal, Role};

fn map_worker_repository_error(error: WorkerRepositoryError) -> Error {
    Error::store(format!("worker store error: {error}"))
}

fn map_project_repository_error(error: ProjectRepositoryError) -> Error {
    Error::store(format!("project store error: {error}"))
}

fn map_assignment_repository_error(error: AssignmentRepositoryError) -> Error {
    match error {
        AssignmentRepositoryError::Connection { message } => {
            Error::store(format!("assignment store unavailable: {message}"))
        }
        AssignmentRepositoryError::Query { message } => {
            Error::store(format!("assignment store error: {message}"))
        }
    }
}

fn assignment_not_found(id: Uuid) -> Error {
    Error::assignment_not_found(format!("assignment {id} not found"))
}

/// Assignment service implementing the staffing workflow and queries.
#[derive(Clone)]
pub struct AssignmentService<W, P, A> {
    workers: Arc<W>,
    projects: Arc<P>,
    assignments: Arc<A>,
}

impl<W, P, A> AssignmentService<W, P, A> {
    /// Create a new service over the worker, project and assignment stores.
    pub fn new(workers: Arc<W>, projects: Arc<P>, assignments: Arc<A>) -> Self {
        Self {
            workers,
            projects,
            assignments,
        }
    }
}

#[async_trait]
impl<W, P, A> AssignmentCommand for AssignmentService<W, P, A>
where
    W: WorkerRepository,
    P: ProjectRepository,
    A: AssignmentRepository,
{
    async fn create_assignment(
        &self,
        principal: Principal,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment, Error> {
        if !role_allowed(&[Role::Admin, Role::ProjectManager], principal.role()) {
            return Err(Error::role_not_allowed(
                "only administrators and project managers may create assignments",
            ));
        }

        let candidate = DateInterval::new(request.start_date, request.end_date);
        let taken = self
            .assignments
            .list_intervals_for_worker(request.worker_id)
            .await
            .map_err(map_assignment_repository_error)?;
        if !is_available(&candidate, &taken) {
            return Err(Error::worker_not_available(format!(
                "worker {} is not available between {} and {}",
                request.worker_id, request.start_date, request.end_date
            )));
        }

        let worker = self
            .workers
            .find_by_id(request.worker_id)
            .await
            .map_err(map_worker_repository_error)?
            .ok_or_else(|| {
                Error::worker_not_found(format!("worker {} not found", request.worker_id))
            })?;

        let project = self
            .projects
            .find_by_id(request.project_id)
            .await
            .map_err(map_project_repository_error)?
            .ok_or_else(|| {
                Error::project_not_found(format!("project {} not found", request.project_id))
            })?;

        let assignment = Assignment::new(Uuid::new_v4(), candidate, project.id(), worker.id());
        self.assignments
            .insert(&assignment)
            .await
            .map_err(map_assignment_repository_error)?;
        Ok(assignment)
    }
}

#[async_trait]
impl<W, P, A> AssignmentQuery for AssignmentService<W, P, A>
where
    W: WorkerRepository,
    P: ProjectRepository,
    A: AssignmentRepository,
{
    async fn list_assignments(&self, principal: Principal) -> Result<Vec<Assignment>, Error> {
        let listed = match Scope::for_principal(&principal) {
            Scope::Unrestricted => self.assignments.list_all().await,
            Scope::OwnedBy(worker_id) => self.assignments.list_for_worker(worker_id).await,
        };
        listed.map_err(map_assignment_repository_error)
    }

    async fn get_assignment(&self, principal: Principal, id: Uuid) -> Result<Assignment, Error> {
        let found = match Scope::for_principal(&principal) {
            Scope::Unrestricted => self.assignments.find_by_id(id).await,
            Scope::OwnedBy(worker_id) => self.assignments.find_for_worker(worker_id, id).await,
        };
        found
            .map_err(map_assignment_repository_error)?
            .ok_or_else(|| assignment_not_found(id))
    }
}

#[cfg(test)]
#[path = "assignment_service_tests.rs"]
mod tests;
