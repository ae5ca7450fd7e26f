//! Handlers for project-scoped reports and the top-level report lookup.

use atrium_core::authz::{authorize, Operation};
use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::models::report::{CreateReport, Report};
use atrium_db::repositories::ReportRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/projects/{project_id}/reports
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Report>>> {
    authorize(Some(&user.principal()), Operation::ListReports)?;

    let reports = ReportRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(reports))
}

/// POST /api/projects/{project_id}/reports
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    authorize(Some(&user.principal()), Operation::CreateReport)?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    input.project_id = project_id;
    input.created_by = user.user_id;

    let report = ReportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Report>> {
    authorize(Some(&user.principal()), Operation::GetReport)?;

    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}
