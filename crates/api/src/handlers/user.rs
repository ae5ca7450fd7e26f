//! Handlers for the `/users` resource.

use atrium_core::authz::{authorize, Operation};
use atrium_db::models::user::UserSummary;
use atrium_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/users
///
/// All users as [`UserSummary`] rows; the password hash never appears, for
/// any caller role.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<UserSummary>>> {
    authorize(Some(&user.principal()), Operation::ListUsers)?;

    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}
