//! Task aggregate root and construction types.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated task field set produced by schema validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Non-empty, trimmed task title.
    pub title: String,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
}

/// A validated task awaiting a store-assigned identifier.
///
/// Both timestamps are taken from the clock in one reading, so a freshly
/// created record satisfies `created_at == updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    fields: TaskFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a new task value from validated fields.
    #[must_use]
    pub fn new(fields: TaskFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            fields,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the validated field set.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    is_completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a task once the store has assigned its identifier.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: &NewTask) -> Self {
        let fields = new_task.fields().clone();
        Self {
            id,
            title: fields.title,
            description: fields.description,
            is_completed: fields.is_completed,
            created_at: new_task.created_at(),
            updated_at: new_task.updated_at(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            is_completed: data.is_completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every caller-supplied field wholesale and refreshes
    /// `updated_at`. The identifier and `created_at` are preserved.
    pub fn replace(&mut self, fields: TaskFields, clock: &impl Clock) {
        self.title = fields.title;
        self.description = fields.description;
        self.is_completed = fields.is_completed;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
