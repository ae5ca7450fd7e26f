//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped task, budget, milestone, and report routes
//! under `/projects/{project_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{budget, milestone, project, report, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                 -> list
/// POST   /                                 -> create
/// GET    /{id}                             -> get_by_id
///
/// GET    /{project_id}/tasks               -> task::list_by_project
/// POST   /{project_id}/tasks               -> task::create
///
/// GET    /{project_id}/budget              -> budget::list_by_project
/// POST   /{project_id}/budget              -> budget::create
/// GET    /{project_id}/budget/summary      -> budget::summary
///
/// GET    /{project_id}/milestones          -> milestone::list_by_project
/// POST   /{project_id}/milestones          -> milestone::create
///
/// GET    /{project_id}/reports             -> report::list_by_project
/// POST   /{project_id}/reports             -> report::create
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new().route("/", get(task::list_by_project).post(task::create));

    let budget_routes = Router::new()
        .route("/", get(budget::list_by_project).post(budget::create))
        .route("/summary", get(budget::summary));

    let milestone_routes =
        Router::new().route("/", get(milestone::list_by_project).post(milestone::create));

    let report_routes = Router::new().route("/", get(report::list_by_project).post(report::create));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .nest("/{project_id}/tasks", task_routes)
        .nest("/{project_id}/budget", budget_routes)
        .nest("/{project_id}/milestones", milestone_routes)
        .nest("/{project_id}/reports", report_routes)
}
