//! The authorization gate.
//!
//! Every HTTP operation maps to one [`Operation`] variant; [`required_roles`]
//! is the single policy table and [`authorize`] the single decision point.
//! Handlers never branch on roles themselves.

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: DbId,
    pub role: Role,
}

/// Every store operation reachable over the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListProjects,
    GetProject,
    CreateProject,
    ListTasks,
    CreateTask,
    UpdateTaskStatus,
    MarkAttendance,
    GetAttendance,
    ListBudgetItems,
    CreateBudgetItem,
    GetBudgetSummary,
    ListMilestones,
    CreateMilestone,
    UpdateMilestoneStatus,
    ListReports,
    CreateReport,
    GetReport,
    ListUsers,
}

/// Roles permitted to create or mutate project-scoped records.
const OFFICERS: &[Role] = &[Role::Admin, Role::ProjectOfficer];

/// Any authenticated principal suffices.
const ANY: &[Role] = &[];

/// The policy table: which roles an operation requires.
///
/// An empty slice means any authenticated principal is allowed. Reads,
/// task-status updates, and attendance marking are open to every role;
/// everything that creates or reshapes project data is restricted to
/// admins and project officers.
pub fn required_roles(operation: Operation) -> &'static [Role] {
    use Operation::*;
    match operation {
        CreateProject | CreateTask | CreateBudgetItem | CreateMilestone
        | UpdateMilestoneStatus | CreateReport => OFFICERS,

        ListProjects | GetProject | ListTasks | UpdateTaskStatus | MarkAttendance
        | GetAttendance | ListBudgetItems | GetBudgetSummary | ListMilestones
        | ListReports | GetReport | ListUsers => ANY,
    }
}

/// Decide whether `principal` may perform `operation`.
///
/// An absent principal is rejected as `Unauthorized` before any role is
/// inspected; a present principal whose role is outside a non-empty required
/// set is rejected as `Forbidden`. Pure function of its arguments.
pub fn authorize(principal: Option<&Principal>, operation: Operation) -> Result<(), CoreError> {
    let principal = principal
        .ok_or_else(|| CoreError::Unauthorized("Authentication required".into()))?;

    let required = required_roles(operation);
    if required.is_empty() || required.contains(&principal.role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{}' may not perform this operation",
            principal.role
        )))
    }
}
