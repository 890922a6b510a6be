//! Wire representation of task records.
//!
//! Serialization is a straight field copy with timestamps rendered as
//! RFC 3339 strings. Deserialization accepts any JSON object; keys the
//! server assigns (`id`, `created_at`, `updated_at`) and unknown keys are
//! discarded by schema validation downstream.

use crate::http::error::ApiError;
use crate::task::domain::Task;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task object exchanged over the HTTP boundary.
///
/// Always carries exactly these six fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
}

/// Maps a domain task to its wire representation.
#[must_use]
pub fn to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        is_completed: task.is_completed(),
        created_at: task.created_at().to_rfc3339(),
        updated_at: task.updated_at().to_rfc3339(),
    }
}

/// Extracts the candidate field object from a request body.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the body is valid JSON but not an
/// object.
pub fn payload_object(body: Value) -> Result<Map<String, Value>, ApiError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::BadRequest(
            "request body must be a JSON object".to_owned(),
        )),
    }
}
