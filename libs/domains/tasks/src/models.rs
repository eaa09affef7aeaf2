use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Hard cap on page size: list calls never return more records than this,
/// regardless of the requested limit.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Task entity - the public view of a task, id included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Whether the task is completed
    pub completed: bool,
}

/// DTO for creating a new task (the create view - no id)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for partially updating an existing task
///
/// Fields absent from the payload leave the stored value untouched. The id
/// is not part of this view and can never be altered through an update.
///
/// `description` uses the double-`Option` encoding: absent means untouched,
/// a string value replaces the stored one. An explicit JSON `null`
/// deserializes the same as absent, so clearing a description requires
/// sending an empty string.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// Query parameters for listing tasks
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct TaskFilter {
    /// Number of records to skip
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of records to return (capped at 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    MAX_PAGE_SIZE
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_PAGE_SIZE,
        }
    }
}

/// Acknowledgement returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

impl Task {
    /// Apply a partial update, leaving absent fields untouched
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
