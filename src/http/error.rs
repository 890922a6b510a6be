//! Unified API error type.
//!
//! Every handler returns `Result<T, ApiError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with the documented status code.
//!
//! Store failures are logged with full detail but only a generic message is
//! returned to the caller so that connection strings, SQL, or pool state
//! never leak to clients.

use crate::task::{domain::ValidationErrors, ports::TaskRepositoryError, services::TaskServiceError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the request lifecycle.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more payload fields failed validation.
    #[error(transparent)]
    Validation(ValidationErrors),

    /// The caller referenced a resource that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The record store is unavailable or rejected the operation.
    #[error("store error: {0}")]
    Store(TaskRepositoryError),
}

impl ApiError {
    /// Builds the not-found error for a task id path segment.
    #[must_use]
    pub fn task_not_found(segment: &str) -> Self {
        Self::NotFound(format!("task {segment} not found"))
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(errors) => Self::Validation(errors),
            TaskServiceError::NotFound(id) => Self::task_not_found(&id.to_string()),
            TaskServiceError::Repository(repo_err) => Self::Store(repo_err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The field error map itself is the response body.
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Store(err) => {
                error!(error = %err, "record store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
