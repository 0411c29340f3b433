//! Worker API handlers.
//!
//! ```text
//! POST /api/v1/auth/sign-up {"username":"ada","email":"ada@example.com","password":"secret"}
//! GET /api/v1/workers
//! GET /api/v1/workers/me
//! GET /api/v1/workers/{id}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::SignUpRequest;
use crate::domain::{EmailAddress, Error, Username, Worker, WorkerId, WorkerValidationError};
use crate::inbound::http::auth::RequestPrincipal;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Sign-up request body for `POST /api/v1/auth/sign-up`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn map_worker_validation_error(field: &str, err: WorkerValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

impl TryFrom<SignUpBody> for SignUpRequest {
    type Error = Error;

    fn try_from(body: SignUpBody) -> Result<Self, Self::Error> {
        let username = Username::new(body.username)
            .map_err(|err| map_worker_validation_error("username", err))?;
        let email =
            EmailAddress::new(body.email).map_err(|err| map_worker_validation_error("email", err))?;
        if body.password.is_empty() {
            return Err(Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password" })));
        }
        Ok(Self {
            username,
            email,
            secret: body.password,
        })
    }
}

/// Register a new worker account.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-up",
    request_body = SignUpBody,
    responses(
        (status = 201, description = "Worker created", body = Worker),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Username or email already taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["workers"],
    operation_id = "signUp",
    security([])
)]
#[post("/auth/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpBody>,
) -> ApiResult<HttpResponse> {
    let request = SignUpRequest::try_from(payload.into_inner())?;
    let worker = state.signup.sign_up(request).await?;
    Ok(HttpResponse::Created().json(worker))
}

/// List every registered worker.
#[utoipa::path(
    get,
    path = "/api/v1/workers",
    responses(
        (status = 200, description = "Workers", body = [Worker]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["workers"],
    operation_id = "listWorkers"
)]
#[get("/workers")]
pub async fn list_workers(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
) -> ApiResult<web::Json<Vec<Worker>>> {
    let workers = state.workers.list_workers(principal.principal()).await?;
    Ok(web::Json(workers))
}

/// Fetch the calling worker's own record.
#[utoipa::path(
    get,
    path = "/api/v1/workers/me",
    responses(
        (status = 200, description = "Worker", body = Worker),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Worker not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["workers"],
    operation_id = "getSelf"
)]
#[get("/workers/me")]
pub async fn get_self(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
) -> ApiResult<web::Json<Worker>> {
    let worker = state
        .workers
        .get_worker(principal.principal(), principal.worker_id())
        .await?;
    Ok(web::Json(worker))
}

/// Fetch one worker by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/workers/{id}",
    params(("id" = Uuid, Path, description = "Worker identifier")),
    responses(
        (status = 200, description = "Worker", body = Worker),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Worker not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["workers"],
    operation_id = "getWorker"
)]
#[get("/workers/{id}")]
pub async fn get_worker(
    state: web::Data<HttpState>,
    principal: RequestPrincipal,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Worker>> {
    let id = WorkerId::from_uuid(path.into_inner());
    let worker = state.workers.get_worker(principal.principal(), id).await?;
    Ok(web::Json(worker))
}
