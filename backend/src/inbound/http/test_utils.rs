//! Shared helpers for HTTP adapter tests.

use std::sync::Arc;

use crate::domain::ports::{
    FixturePrincipalResolver, MockAssignmentCommand, MockAssignmentQuery, MockProjectCommand,
    MockProjectQuery, MockWorkerSignup, MockWorkersQuery, PrincipalResolver,
};
use crate::domain::{Principal, Role, WorkerId};
use crate::inbound::http::state::HttpState;

/// State whose driving ports are unprimed mocks; any call panics the test.
///
/// Override the ports a test exercises via struct update syntax.
pub fn fixture_state() -> HttpState {
    HttpState {
        signup: Arc::new(MockWorkerSignup::new()),
        workers: Arc::new(MockWorkersQuery::new()),
        project_commands: Arc::new(MockProjectCommand::new()),
        project_queries: Arc::new(MockProjectQuery::new()),
        assignment_commands: Arc::new(MockAssignmentCommand::new()),
        assignment_queries: Arc::new(MockAssignmentQuery::new()),
        principal_resolver: Arc::new(FixturePrincipalResolver),
    }
}

/// State with a custom principal resolver and unprimed driving ports.
pub fn state_with_resolver(resolver: Arc<dyn PrincipalResolver>) -> HttpState {
    HttpState {
        principal_resolver: resolver,
        ..fixture_state()
    }
}

/// A principal plus the fixture bearer token that resolves to it.
pub fn principal_with_token(role: Role) -> (Principal, String) {
    let id = WorkerId::random();
    (Principal::new(id, role), format!("Bearer {id}:{role}"))
}
