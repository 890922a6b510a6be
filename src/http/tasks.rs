//! Task CRUD endpoints.
//!
//! Paths keep their trailing slash: `/api/tasks/` for the collection and
//! `/api/tasks/{id}/` for single items. The id segment must be an integer;
//! anything else is a routing miss reported as 404, not a bad request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mockable::Clock;
use serde_json::Value;
use tracing::info;

use crate::http::error::ApiError;
use crate::http::wire::{TaskResponse, payload_object, to_response};
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;

/// Builds the application router around a task service handle.
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/tasks/",
            get(list_tasks::<R, C>).post(create_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}/",
            get(retrieve_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(service)
}

/// Parses the id path segment, mapping non-integer segments to 404.
fn parse_task_id(segment: &str) -> Result<TaskId, ApiError> {
    segment
        .parse::<i64>()
        .map(TaskId::new)
        .map_err(|_| ApiError::task_not_found(segment))
}

async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.list().await?;
    Ok(Json(tasks.iter().map(to_response).collect()))
}

async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let payload = payload_object(body)?;
    let task = service.create(&payload).await?;
    info!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(to_response(&task))))
}

async fn retrieve_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(segment): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&segment)?;
    let task = service.get(id).await?;
    Ok(Json(to_response(&task)))
}

async fn update_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&segment)?;
    let payload = payload_object(body)?;
    let task = service.replace(id, &payload).await?;
    info!(id = %task.id(), "task replaced");
    Ok(Json(to_response(&task)))
}

async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(segment): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = parse_task_id(&segment)?;
    service.delete(id).await?;
    info!(%id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
