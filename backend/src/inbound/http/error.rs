//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Infrastructure causes are logged and replaced with a generic body
//! before anything leaves the process.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized | ErrorCode::RoleNotAllowed => StatusCode::UNAUTHORIZED,
        ErrorCode::WorkerNotFound | ErrorCode::ProjectNotFound | ErrorCode::AssignmentNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::WorkerAlreadyExists | ErrorCode::WorkerNotAvailable => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_infrastructure(error: &Error) -> Error {
    if error.code().is_infrastructure() {
        Error::new(error.code(), "internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code().is_infrastructure() {
            error!(code = ?self.code(), message = %self.message(), "infrastructure failure");
        }
        HttpResponse::build(self.status_code()).json(redact_if_infrastructure(self))
    }
}
