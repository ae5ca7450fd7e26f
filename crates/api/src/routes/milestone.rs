//! Route definitions for the top-level `/milestones` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::milestone;
use crate::state::AppState;

/// Routes mounted at `/milestones`.
///
/// ```text
/// PATCH /{id}/status -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/status", patch(milestone::update_status))
}
