//! Domain layer for the atrium ERP backend.
//!
//! Pure types and logic shared by the store and the HTTP surface:
//!
//! - [`error`] -- the domain error taxonomy ([`error::CoreError`]).
//! - [`roles`] -- the three user roles and the [`authz`] principal type.
//! - [`authz`] -- the authorization gate: a declarative operation -> role-set
//!   policy table and the single [`authz::authorize`] entry point.
//! - [`budget`] -- income/expense aggregation over budget items.
//! - [`status`] -- status and category enums for the persisted entities.
//!
//! Nothing in this crate performs I/O; sqlx appears only so the enums can
//! derive their PostgreSQL type mappings.

pub mod authz;
pub mod budget;
pub mod error;
pub mod roles;
pub mod status;
pub mod types;
