//! Handlers for project-scoped milestones and the status update.

use atrium_core::authz::{authorize, Operation};
use atrium_core::error::CoreError;
use atrium_core::status::MilestoneStatus;
use atrium_core::types::{Date, DbId};
use atrium_db::models::milestone::{CreateMilestone, Milestone};
use atrium_db::repositories::MilestoneRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /milestones/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateMilestoneStatusRequest {
    pub status: MilestoneStatus,
    pub completion_date: Option<Date>,
}

/// GET /api/projects/{project_id}/milestones
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Milestone>>> {
    authorize(Some(&user.principal()), Operation::ListMilestones)?;

    let milestones = MilestoneRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(milestones))
}

/// POST /api/projects/{project_id}/milestones
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateMilestone>,
) -> AppResult<(StatusCode, Json<Milestone>)> {
    authorize(Some(&user.principal()), Operation::CreateMilestone)?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    input.project_id = project_id;

    let milestone = MilestoneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(milestone)))
}

/// PATCH /api/milestones/{id}/status
///
/// Status and completion date are overwritten together. A completion date may
/// only accompany the `completed` status.
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMilestoneStatusRequest>,
) -> AppResult<Json<Milestone>> {
    authorize(Some(&user.principal()), Operation::UpdateMilestoneStatus)?;

    if input.completion_date.is_some() && input.status != MilestoneStatus::Completed {
        return Err(AppError::Core(CoreError::Validation(
            "completion_date may only be set when status is completed".into(),
        )));
    }

    let milestone = MilestoneRepo::update_status(&state.pool, id, input.status, input.completion_date)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;
    Ok(Json(milestone))
}
