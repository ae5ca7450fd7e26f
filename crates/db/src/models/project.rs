//! Project entity model and DTOs.

use atrium_core::status::ProjectStatus;
use atrium_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub budget: Decimal,
    pub status: ProjectStatus,
    pub manager_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    /// Defaults to 0 if omitted. Must be non-negative.
    pub budget: Option<Decimal>,
    /// Defaults to `planned` if omitted.
    pub status: Option<ProjectStatus>,
    pub manager_id: Option<DbId>,
}
