//! Assignment API handlers.
//!
//! ```text
//! POST /api/v1/assignments {"projectId":"<uuid>","workerId":"<uuid>","startDate":"2024-01-01","endDate":"2024-01-31"}
//! GET /api/v1/assignments
//! GET /api/v1/assignments/{id}
//! ```

use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::CreateAssignmentRequest;
use crate::domain::{Assignment, Error, WorkerId};
use crate::inbound::http::auth::RequestPrincipal;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Assignment creation body for `POST /api/v1/assignments`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentBody {
    pub project_id: Uuid,
    pub worker_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<CreateAssignmentBody> for CreateAssignmentRequest {
    fn from(body: CreateAssignmentBody) -> Self {
        Self {
            project_id: body.project_id,
            worker_id: WorkerId::from_uuid(body.worker_id),
            start_date: body.start_date,
            end_date: body.end_date,
        }
    }
}

/// Assign a worker to a project over a date range.
#[utoipa::path(
    post,
    path = "/api/v1/assignments",
    request_body = CreateAssignmentBody,
    responses(
        (status = 201, description = "Assignment created", body = Assignment),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Caller role not allowed", body = Error),
        (status = 404, description = "Worker or project not found", body = Error),
        (status = 409, description = "Worker not available", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["assignments"],
    operation_id = "createAssignment"
)]
#[post("/assignments")]
pub async fn create_assignment(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
    payload: web::Json<CreateAssignmentBody>,
) -> ApiResult<HttpResponse> {
    let assignment = state
        .assignment_commands
        .create_assignment(principal.principal(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(assignment))
}

/// List the assignments visible to the caller.
#[utoipa::path(
    get,
    path = "/api/v1/assignments",
    responses(
        (status = 200, description = "Assignments", body = [Assignment]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["assignments"],
    operation_id = "listAssignments"
)]
#[get("/assignments")]
pub async fn list_assignments(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
) -> ApiResult<web::Json<Vec<Assignment>>> {
    let assignments = state
        .assignment_queries
        .list_assignments(principal.principal())
        .await?;
    Ok(web::Json(assignments))
}

/// Fetch one assignment visible to the caller.
#[utoipa::path(
    get,
    path = "/api/v1/assignments/{id}",
    params(("id" = Uuid, Path, description = "Assignment identifier")),
    responses(
        (status = 200, description = "Assignment", body = Assignment),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Assignment not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["assignments"],
    operation_id = "getAssignment"
)]
#[get("/assignments/{id}")]
pub async fn get_assignment(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Assignment>> {
    let assignment = state
        .assignment_queries
        .get_assignment(principal.principal(), path.into_inner())
        .await?;
    Ok(web::Json(assignment))
}
