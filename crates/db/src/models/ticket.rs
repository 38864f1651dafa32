//! Ticket models and DTOs.

use chrono::NaiveDate;
use intake_core::submission::Submission;
use intake_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tickets` table.
///
/// Field order matches `intake_core::export::TICKET_EXPORT_COLUMNS`; the CSV
/// export serializes this struct directly.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub created_at: Timestamp,
    pub project_name: String,
    pub department: String,
    pub requester_name: String,
    pub requester_email: String,
    pub description: String,
    pub priority: String,
    pub impact: String,
    pub due_date: Option<NaiveDate>,
    pub attachments: Option<String>,
    pub status: String,
    pub manager_comment: Option<String>,
    pub estimate_hours: Option<f64>,
    pub estimate_notes: Option<String>,
    pub triaged_by: Option<String>,
    pub triaged_at: Option<Timestamp>,
}

/// DTO for inserting a new ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicket {
    pub project_name: String,
    pub department: String,
    pub requester_name: String,
    pub requester_email: String,
    pub description: String,
    pub priority: String,
    pub impact: String,
    pub due_date: Option<NaiveDate>,
    pub attachments: Option<String>,
}

impl From<Submission> for CreateTicket {
    fn from(s: Submission) -> Self {
        Self {
            project_name: s.project_name,
            department: s.department.as_str().to_string(),
            requester_name: s.requester_name,
            requester_email: s.requester_email,
            description: s.description,
            priority: s.priority.as_str().to_string(),
            impact: s.impact.as_str().to_string(),
            due_date: s.due_date,
            attachments: s.attachments,
        }
    }
}

/// Listing filters. Absent or `"(all)"` status/department values match
/// everything; `search` is a substring over the project name, description,
/// requester name, and requester email.
///
/// Search case folding is ASCII-only (SQLite `LIKE`): `"invoice"` finds
/// `"INVOICE"`, but `"über"` does not find `"Über"`. Blank search text is
/// ignored; other text is matched as typed, without trimming.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub department: Option<String>,
    pub search: Option<String>,
}

impl TicketFilter {
    /// Filter on status only.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

/// Number of tickets currently in one status.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}
