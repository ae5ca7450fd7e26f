//! Attendance entity model and DTOs.

use atrium_core::status::AttendanceStatus;
use atrium_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An attendance row from the `attendance` table: one mark per user per day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub user_id: DbId,
    pub date: Date,
    pub status: AttendanceStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for marking attendance. `user_id` and `date` are bound server-side.
#[derive(Debug, Clone)]
pub struct CreateAttendance {
    pub user_id: DbId,
    pub date: Date,
    pub status: AttendanceStatus,
}
