//! Domain logic for the project intake portal.
//!
//! Pure types and rules with no I/O: option sets, submission validation,
//! the ticket state machine, role access checks, and CSV export rendering.

pub mod access;
pub mod error;
pub mod export;
pub mod submission;
pub mod ticket;
pub mod types;
pub mod workflow;
