//! Domain model for task records.
//!
//! The task domain models validated task field sets, creation and wholesale
//! replacement of records, and timestamp maintenance while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod schema;
mod task;

pub use error::ValidationErrors;
pub use ids::TaskId;
pub use schema::{
    FieldDefault, FieldKind, FieldSpec, SERVER_ASSIGNED_FIELDS, TASK_FIELDS, validate_payload,
};
pub use task::{NewTask, PersistedTaskData, Task, TaskFields};
