//! Route definitions for the `/attendance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET  / -> current (?date=YYYY-MM-DD, defaults to today)
/// POST / -> mark
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(attendance::current).post(attendance::mark))
}
