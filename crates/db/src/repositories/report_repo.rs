//! Repository for the `reports` table.

use atrium_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{CreateReport, Report};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, report_type, created_at, \
                        created_by, attachments";

/// Provides CRUD operations for reports. Reports are append-only: there is
/// no update surface, so `created_at` stays immutable.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report, returning the created row.
    ///
    /// `attachments` defaults to an empty JSON array when omitted.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (project_id, title, content, report_type, created_by, attachments)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.report_type)
            .bind(input.created_by)
            .bind(input.attachments.as_ref())
            .fetch_one(pool)
            .await
    }

    /// List all reports for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
