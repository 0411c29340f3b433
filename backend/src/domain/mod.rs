//! Domain entities, policies and services.
//!
//! Purpose: model the staffing core — workers, projects and assignments —
//! together with the pure policy functions (authorization, availability) and
//! the workflow services that compose them. Everything here is transport and
//! storage agnostic; adapters plug in through the traits in [`ports`].

pub mod assignment;
pub mod assignment_service;
pub mod authorization;
pub mod availability;
pub mod error;
pub mod ports;
pub mod project;
pub mod project_service;
pub mod worker;
pub mod worker_service;

pub use self::assignment::{Assignment, DateInterval};
pub use self::assignment_service::AssignmentService;
pub use self::authorization::{role_allowed, Principal, Scope};
pub use self::availability::is_available;
pub use self::error::{Error, ErrorCode};
pub use self::project::{Project, ProjectName, ProjectValidationError, PROJECT_NAME_MAX};
pub use self::project_service::ProjectService;
pub use self::worker::{
    CredentialHash, EmailAddress, Role, Username, Worker, WorkerId, WorkerValidationError,
    WorkerWithCredential, USERNAME_MAX,
};
pub use self::worker_service::WorkerService;
