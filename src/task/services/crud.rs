//! Service layer for task create/read/update/delete operations.

use crate::task::{
    domain::{NewTask, Task, TaskId, ValidationErrors, validate_payload},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// One or more payload fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Handlers hold no state of their own; every operation goes through the
/// repository handle injected here at construction.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every stored task in insertion order.
    ///
    /// An empty store yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Validates a candidate payload and persists a new task.
    ///
    /// Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload fails the
    /// field schema, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, payload: &Map<String, Value>) -> TaskServiceResult<Task> {
        let fields = validate_payload(payload)?;
        let new_task = NewTask::new(fields, &*self.clock);
        Ok(self.repository.insert(&new_task).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Replaces an existing task's fields wholesale.
    ///
    /// The existence check runs before validation, so an unknown id reports
    /// not-found even when the payload is also invalid. On validation
    /// failure the stored record is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when the payload fails the field
    /// schema, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn replace(
        &self,
        id: TaskId,
        payload: &Map<String, Value>,
    ) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        let fields = validate_payload(payload)?;
        task.replace(fields, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
