//! Handlers for tasks, both project-scoped listing/creation and the
//! top-level status update.

use atrium_core::authz::{authorize, Operation};
use atrium_core::error::CoreError;
use atrium_core::status::TaskStatus;
use atrium_core::types::DbId;
use atrium_db::models::task::{CreateTask, Task};
use atrium_db::repositories::TaskRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PATCH /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

/// GET /api/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    authorize(Some(&user.principal()), Operation::ListTasks)?;

    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// POST /api/projects/{project_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    authorize(Some(&user.principal()), Operation::CreateTask)?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    // The project is taken from the path, never the body.
    input.project_id = project_id;

    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTaskStatusRequest>,
) -> AppResult<Json<Task>> {
    authorize(Some(&user.principal()), Operation::UpdateTaskStatus)?;

    let task = TaskRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}
