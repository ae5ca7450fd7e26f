//! Task entity model and DTOs.

use atrium_core::status::{TaskPriority, TaskStatus};
use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub project_id: DbId,
    pub assignee_id: Option<DbId>,
    pub status: TaskStatus,
    pub due_date: Option<Timestamp>,
    pub priority: TaskPriority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. `project_id` is bound from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    #[serde(skip)]
    pub project_id: DbId,
    pub assignee_id: Option<DbId>,
    /// Defaults to `todo` if omitted.
    pub status: Option<TaskStatus>,
    pub due_date: Option<Timestamp>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<TaskPriority>,
}
