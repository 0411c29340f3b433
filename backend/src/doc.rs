//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every handler path from the inbound layer, the domain
//! schemas they reference, and the bearer token security scheme. The
//! document is served at `GET /api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Assignment, DateInterval, Error, ErrorCode, Project, Worker};
use crate::inbound::http::assignments::CreateAssignmentBody;
use crate::inbound::http::projects::CreateProjectBody;
use crate::inbound::http::workers::SignUpBody;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Bearer token resolved to a worker principal."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Crewplan API",
        description = "HTTP interface for worker registration, project setup and assignment staffing."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::workers::sign_up,
        crate::inbound::http::workers::list_workers,
        crate::inbound::http::workers::get_self,
        crate::inbound::http::workers::get_worker,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::get_project,
        crate::inbound::http::assignments::create_assignment,
        crate::inbound::http::assignments::list_assignments,
        crate::inbound::http::assignments::get_assignment,
    ),
    components(schemas(
        Worker,
        Project,
        Assignment,
        DateInterval,
        Error,
        ErrorCode,
        SignUpBody,
        CreateProjectBody,
        CreateAssignmentBody,
    )),
    tags(
        (name = "workers", description = "Worker registration and lookup"),
        (name = "projects", description = "Project creation and lookup"),
        (name = "assignments", description = "Assignment staffing and lookup")
    )
)]
pub struct ApiDoc;
