//! Repository for the `milestones` table.

use atrium_core::status::MilestoneStatus;
use atrium_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::milestone::{CreateMilestone, Milestone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, due_date, status, \
                        completion_date, created_at, updated_at";

/// Provides CRUD operations for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new milestone, returning the created row.
    ///
    /// `status` defaults to `pending` when omitted.
    pub async fn create(pool: &PgPool, input: &CreateMilestone) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (project_id, title, description, due_date, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'pending'::milestone_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// List all milestones for a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM milestones WHERE project_id = $1 ORDER BY due_date, id"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a milestone's status and completion date together.
    ///
    /// Passing `None` for `completion_date` clears the column, so moving a
    /// milestone out of `completed` drops its completion date.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: MilestoneStatus,
        completion_date: Option<Date>,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET status = $2, completion_date = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(status)
            .bind(completion_date)
            .fetch_optional(pool)
            .await
    }
}
