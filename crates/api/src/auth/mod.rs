//! Authentication primitives.
//!
//! - [`pin`] -- Per-role PIN configuration and the unlock check.
//! - [`jwt`] -- Role token generation and validation.

pub mod jwt;
pub mod pin;
