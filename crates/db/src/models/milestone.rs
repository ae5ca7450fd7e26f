//! Milestone entity model and DTOs.

use atrium_core::status::MilestoneStatus;
use atrium_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A milestone row from the `milestones` table.
///
/// `completion_date` is only populated while `status` is `completed`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub due_date: Date,
    pub status: MilestoneStatus,
    pub completion_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a milestone. `project_id` is bound from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMilestone {
    #[serde(skip)]
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub due_date: Date,
    /// Defaults to `pending` if omitted.
    pub status: Option<MilestoneStatus>,
}
