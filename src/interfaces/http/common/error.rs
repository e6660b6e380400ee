//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::ApiResponse;
use crate::shared::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by every handler.
///
/// | DomainError     | Status | Body       |
/// |-----------------|--------|------------|
/// | NotFound        | 404    | empty      |
/// | AlreadyExists   | 400    | empty      |
/// | Validation      | 400    | error JSON |
/// | Unauthorized    | 401    | error JSON |
/// | Forbidden       | 403    | error JSON |
/// | Conflict        | 409    | error JSON |
/// | Storage         | 500    | error JSON |
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists { .. } | DomainError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            DomainError::NotFound { .. } => status.into_response(),
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => {
                warn!(entity, field, value = %value, "Duplicate rejected");
                status.into_response()
            }
            DomainError::Validation(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg)
            | DomainError::Conflict(msg) => json_error(status, msg),
            DomainError::Storage(msg) => {
                error!(error = %msg, "Request failed");
                json_error(status, "Internal server error")
            }
        }
    }
}
