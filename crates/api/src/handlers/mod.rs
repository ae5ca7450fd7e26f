//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers authenticate via the [`crate::middleware::auth::AuthUser`]
//! extractor, consult the `atrium_core::authz` policy table for the role
//! decision, then delegate to the corresponding repository in `atrium_db`
//! and map errors via [`crate::error::AppError`].

pub mod attendance;
pub mod auth;
pub mod budget;
pub mod milestone;
pub mod project;
pub mod report;
pub mod task;
pub mod user;
