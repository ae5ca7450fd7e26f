//! Handlers for the `/attendance` resource.
//!
//! Marks are always recorded against the authenticated principal and today's
//! UTC date; the lookup accepts an optional `?date=` and defaults to today.

use atrium_core::authz::{authorize, Operation};
use atrium_core::status::AttendanceStatus;
use atrium_core::types::Date;
use atrium_db::models::attendance::{Attendance, CreateAttendance};
use atrium_db::repositories::AttendanceRepo;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /attendance`.
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub status: AttendanceStatus,
}

/// Query parameters for `GET /attendance`.
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    /// Calendar day to look up; defaults to today (UTC).
    pub date: Option<Date>,
}

/// POST /api/attendance
///
/// Record today's mark for the caller. A second mark the same day trips the
/// per-day unique constraint and surfaces as 409.
pub async fn mark(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<MarkAttendanceRequest>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    authorize(Some(&user.principal()), Operation::MarkAttendance)?;

    let record = AttendanceRepo::mark(
        &state.pool,
        &CreateAttendance {
            user_id: user.user_id,
            date: chrono::Utc::now().date_naive(),
            status: input.status,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/attendance
///
/// The caller's mark for the requested day (default: today), or `null` when
/// none has been recorded yet -- benign absence, not an error.
pub async fn current(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<Option<Attendance>>> {
    authorize(Some(&user.principal()), Operation::GetAttendance)?;

    let date = query.date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let record = AttendanceRepo::find_by_user_and_date(&state.pool, user.user_id, date).await?;
    Ok(Json(record))
}
