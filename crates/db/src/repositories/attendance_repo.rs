//! Repository for the `attendance` table.

use atrium_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::attendance::{Attendance, CreateAttendance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, date, status, created_at, updated_at";

/// Provides CRUD operations for attendance marks.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert an attendance mark, returning the created row.
    ///
    /// The `uq_attendance_user_date` constraint rejects a second mark for the
    /// same user and day; the violation surfaces to the caller unwrapped so
    /// the api layer can map it to a conflict.
    pub async fn mark(pool: &PgPool, input: &CreateAttendance) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (user_id, date, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(input.user_id)
            .bind(input.date)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find the mark for one user on one calendar day, if any.
    pub async fn find_by_user_and_date(
        pool: &PgPool,
        user_id: DbId,
        date: Date,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendance WHERE user_id = $1 AND date = $2");
        sqlx::query_as::<_, Attendance>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }
}
