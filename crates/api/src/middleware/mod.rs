//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the unlocked role from a JWT Bearer token.
//! - [`rbac::RequireReviewer`] -- Requires the `reviewer` role.
//! - [`rbac::RequireManager`] -- Requires the `manager` role.
//! - [`rbac::RequireStaff`] -- Requires any unlocked role.

pub mod auth;
pub mod rbac;
