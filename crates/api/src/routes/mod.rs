//! Route definitions.

pub mod attendance;
pub mod auth;
pub mod health;
pub mod milestone;
pub mod project;
pub mod report;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
/// /auth/me                               current user (requires auth)
///
/// /projects                              list, create
/// /projects/{id}                         get
/// /projects/{project_id}/tasks           list, create
/// /projects/{project_id}/budget          list, create (?start_date, ?end_date)
/// /projects/{project_id}/budget/summary  allocated/spent totals
/// /projects/{project_id}/milestones      list, create
/// /projects/{project_id}/reports         list, create
///
/// /tasks/{id}/status                     update status (PATCH)
/// /milestones/{id}/status                update status (PATCH)
/// /reports/{id}                          get
///
/// /attendance                            mark (POST), current (GET, ?date)
/// /users                                 list (password-redacted)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/milestones", milestone::router())
        .nest("/reports", report::router())
        .nest("/attendance", attendance::router())
        .nest("/users", user::router())
}
