//! Handlers for project-scoped budget items and the allocated/spent summary.

use atrium_core::authz::{authorize, Operation};
use atrium_core::budget::BudgetSummary;
use atrium_core::error::CoreError;
use atrium_core::types::{Date, DbId};
use atrium_db::models::budget_item::{BudgetItem, CreateBudgetItem};
use atrium_db::repositories::BudgetItemRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /projects/{id}/budget`.
///
/// Bounds are inclusive; either may be supplied alone.
#[derive(Debug, Deserialize)]
pub struct BudgetWindowQuery {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// GET /api/projects/{project_id}/budget
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Query(window): Query<BudgetWindowQuery>,
) -> AppResult<Json<Vec<BudgetItem>>> {
    authorize(Some(&user.principal()), Operation::ListBudgetItems)?;

    let items = BudgetItemRepo::list_by_project(
        &state.pool,
        project_id,
        window.start_date,
        window.end_date,
    )
    .await?;
    Ok(Json(items))
}

/// POST /api/projects/{project_id}/budget
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateBudgetItem>,
) -> AppResult<(StatusCode, Json<BudgetItem>)> {
    authorize(Some(&user.principal()), Operation::CreateBudgetItem)?;

    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".into(),
        )));
    }
    if input.amount < Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "amount must be non-negative".into(),
        )));
    }

    // Path and principal are authoritative for these two, never the body.
    input.project_id = project_id;
    input.created_by = user.user_id;

    let item = BudgetItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/projects/{project_id}/budget/summary
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<BudgetSummary>> {
    authorize(Some(&user.principal()), Operation::GetBudgetSummary)?;

    let summary = BudgetItemRepo::project_summary(&state.pool, project_id).await?;
    Ok(Json(summary))
}
