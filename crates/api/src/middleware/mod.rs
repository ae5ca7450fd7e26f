//! Request-level extractors.
//!
//! [`auth::AuthUser`] authenticates; the role decision is made by the policy
//! table in `atrium_core::authz`, consulted by each handler.

pub mod auth;
