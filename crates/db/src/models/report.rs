//! Report entity model and DTOs.

use atrium_core::status::ReportType;
use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A report row from the `reports` table. `created_at` is immutable; there
/// is no update surface for reports.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    pub report_type: ReportType,
    pub created_at: Timestamp,
    pub created_by: DbId,
    /// JSON array of attachment references. Defaults to `[]`.
    pub attachments: serde_json::Value,
}

/// DTO for creating a report. `project_id` is bound from the request path
/// and `created_by` from the authenticated principal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReport {
    #[serde(skip)]
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    pub report_type: ReportType,
    pub attachments: Option<serde_json::Value>,
    #[serde(skip)]
    pub created_by: DbId,
}
