pub mod approval;
pub mod auth;
pub mod options;
pub mod ticket;
pub mod triage;
