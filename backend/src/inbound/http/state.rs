//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AssignmentCommand, AssignmentQuery, PrincipalResolver, ProjectCommand, ProjectQuery,
    WorkerSignup, WorkersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn WorkerSignup>,
    pub workers: Arc<dyn WorkersQuery>,
    pub project_commands: Arc<dyn ProjectCommand>,
    pub project_queries: Arc<dyn ProjectQuery>,
    pub assignment_commands: Arc<dyn AssignmentCommand>,
    pub assignment_queries: Arc<dyn AssignmentQuery>,
    pub principal_resolver: Arc<dyn PrincipalResolver>,
}
