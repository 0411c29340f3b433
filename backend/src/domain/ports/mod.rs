//! Domain ports and supporting types for the hexagonal boundary.

mod assignment_command;
mod assignment_query;
mod assignment_repository;
mod credential_hasher;
mod principal_resolver;
mod project_command;
mod project_query;
mod project_repository;
mod worker_repository;
mod worker_signup;
mod workers_query;

#[cfg(test)]
pub use assignment_command::MockAssignmentCommand;
pub use assignment_command::{AssignmentCommand, CreateAssignmentRequest};
#[cfg(test)]
pub use assignment_query::MockAssignmentQuery;
pub use assignment_query::AssignmentQuery;
#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
pub use assignment_repository::{AssignmentRepository, AssignmentRepositoryError};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError, FixtureCredentialHasher};
#[cfg(test)]
pub use principal_resolver::MockPrincipalResolver;
pub use principal_resolver::{
    FixturePrincipalResolver, PrincipalResolver, PrincipalResolverError,
};
#[cfg(test)]
pub use project_command::MockProjectCommand;
pub use project_command::{CreateProjectRequest, ProjectCommand};
#[cfg(test)]
pub use project_query::MockProjectQuery;
pub use project_query::ProjectQuery;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
#[cfg(test)]
pub use worker_repository::MockWorkerRepository;
pub use worker_repository::{WorkerRepository, WorkerRepositoryError};
#[cfg(test)]
pub use worker_signup::MockWorkerSignup;
pub use worker_signup::{SignUpRequest, WorkerSignup};
#[cfg(test)]
pub use workers_query::MockWorkersQuery;
pub use workers_query::WorkersQuery;
