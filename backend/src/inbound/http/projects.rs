//! Project API handlers.
//!
//! ```text
//! POST /api/v1/projects {"name":"Apollo","referringEmployeeId":"<uuid>"}
//! GET /api/v1/projects
//! GET /api/v1/projects/{id}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::CreateProjectRequest;
use crate::domain::{Error, Project, ProjectName, WorkerId};
use crate::inbound::http::auth::RequestPrincipal;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Project creation body for `POST /api/v1/projects`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    pub name: String,
    pub referring_employee_id: Uuid,
}

impl TryFrom<CreateProjectBody> for CreateProjectRequest {
    type Error = Error;

    fn try_from(body: CreateProjectBody) -> Result<Self, Self::Error> {
        let name = ProjectName::new(body.name).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
        })?;
        Ok(Self {
            name,
            referring_employee_id: WorkerId::from_uuid(body.referring_employee_id),
        })
    }
}

/// Create a project referencing a project manager.
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = CreateProjectBody,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Caller or referrer role not allowed", body = Error),
        (status = 404, description = "Referring worker not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
    payload: web::Json<CreateProjectBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateProjectRequest::try_from(payload.into_inner())?;
    let project = state
        .project_commands
        .create_project(principal.principal(), request)
        .await?;
    Ok(HttpResponse::Created().json(project))
}

/// List the projects visible to the caller.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    responses(
        (status = 200, description = "Projects", body = [Project]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
) -> ApiResult<web::Json<Vec<Project>>> {
    let projects = state
        .project_queries
        .list_projects(principal.principal())
        .await?;
    Ok(web::Json(projects))
}

/// Fetch one project visible to the caller.
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    params(("id" = Uuid, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Project not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["projects"],
    operation_id = "getProject"
)]
#[get("/projects/{id}")]
pub async fn get_project(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Project>> {
    let project = state
        .project_queries
        .get_project(principal.principal(), path.into_inner())
        .await?;
    Ok(web::Json(project))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{MockProjectCommand, MockProjectQuery};
    use crate::domain::Role;
    use crate::inbound::http::test_utils::{fixture_state, principal_with_token};

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(create_project)
                .service(list_projects)
                .service(get_project),
        )
    }

    fn sample_project(referrer: WorkerId) -> Project {
        Project::new(
            Uuid::new_v4(),
            ProjectName::new("Apollo").expect("fixture name"),
            referrer,
        )
    }

    #[actix_web::test]
    async fn create_project_returns_created_with_camel_case_json() {
        let (principal, token) = principal_with_token(Role::Admin);
        let referrer = WorkerId::random();
        let created = sample_project(referrer);
        let returned = created.clone();

        let mut commands = MockProjectCommand::new();
        commands
            .expect_create_project()
            .withf(move |caller, request| {
                *caller == principal && request.referring_employee_id == referrer
            })
            .returning(move |_, _| Ok(returned.clone()));

        let state = HttpState {
            project_commands: Arc::new(commands),
            ..fixture_state()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/projects")
            .insert_header(("Authorization", token))
            .set_json(&CreateProjectBody {
                name: "Apollo".into(),
                referring_employee_id: *referrer.as_uuid(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["name"], "Apollo");
        assert_eq!(value["referringEmployeeId"], referrer.to_string());
        assert!(value.get("referring_employee_id").is_none());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[actix_web::test]
    async fn create_project_rejects_blank_names(#[case] name: &str) {
        let (_, token) = principal_with_token(Role::Admin);
        let app = actix_test::init_service(test_app(fixture_state())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/projects")
            .insert_header(("Authorization", token))
            .set_json(&CreateProjectBody {
                name: name.into(),
                referring_employee_id: Uuid::new_v4(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn create_project_maps_role_denials_to_unauthorised() {
        let (_, token) = principal_with_token(Role::Employee);

        let mut commands = MockProjectCommand::new();
        commands
            .expect_create_project()
            .returning(|_, _| Err(Error::role_not_allowed("denied")));

        let state = HttpState {
            project_commands: Arc::new(commands),
            ..fixture_state()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/projects")
            .insert_header(("Authorization", token))
            .set_json(&CreateProjectBody {
                name: "Apollo".into(),
                referring_employee_id: Uuid::new_v4(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn list_projects_passes_the_caller_through() {
        let (principal, token) = principal_with_token(Role::Employee);
        let owned = vec![sample_project(WorkerId::random())];
        let returned = owned.clone();

        let mut queries = MockProjectQuery::new();
        queries
            .expect_list_projects()
            .with(eq(principal))
            .returning(move |_| Ok(returned.clone()));

        let state = HttpState {
            project_queries: Arc::new(queries),
            ..fixture_state()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/projects")
            .insert_header(("Authorization", token))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.as_array().expect("array").len(), 1);
    }

    #[actix_web::test]
    async fn get_project_maps_missing_records_to_not_found() {
        let (_, token) = principal_with_token(Role::Admin);

        let mut queries = MockProjectQuery::new();
        queries
            .expect_get_project()
            .returning(|_, _| Err(Error::project_not_found("missing")));

        let state = HttpState {
            project_queries: Arc::new(queries),
            ..fixture_state()
        };
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", token))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
