//! Route definitions for the top-level `/tasks` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// PATCH /{id}/status -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/status", patch(task::update_status))
}
