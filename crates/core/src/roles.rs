//! User roles.
//!
//! The role set is closed: every user row carries exactly one of these three
//! values, stored as the PostgreSQL enum type `user_role`.

use serde::{Deserialize, Serialize};

/// A user's role, gating access to mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectOfficer,
    Employee,
}

impl Role {
    /// The wire/database name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectOfficer => "project_officer",
            Role::Employee => "employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
