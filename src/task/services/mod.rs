//! Orchestration services for task operations.

mod crud;

pub use crud::{TaskService, TaskServiceError, TaskServiceResult};
