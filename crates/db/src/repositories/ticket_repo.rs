//! Repository for the `tickets` table.
//!
//! The store writes whatever it is told: status legality is checked by
//! [`crate::workflow::TicketWorkflow`], not here. Every method is a single
//! statement, so each write is atomic on its own.

use chrono::Utc;
use intake_core::ticket::{active_filter, TicketStatus};
use intake_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::ticket::{CreateTicket, StatusCount, Ticket, TicketFilter};

/// Column list for tickets queries.
const COLUMNS: &str = "id, created_at, project_name, department, requester_name, \
    requester_email, description, priority, impact, due_date, attachments, status, \
    manager_comment, estimate_hours, estimate_notes, triaged_by, triaged_at";

/// Listing order: priority rank, then submission time, then id.
const LIST_ORDER: &str = "CASE priority \
        WHEN 'Critical' THEN 1 \
        WHEN 'High' THEN 2 \
        WHEN 'Medium' THEN 3 \
        WHEN 'Low' THEN 4 \
        ELSE 5 END, \
    created_at ASC, id ASC";

/// Provides create, read, and update operations for tickets. Tickets are never deleted.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert a new ticket in `Submitted` status, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTicket) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (
                created_at, project_name, department, requester_name, requester_email,
                description, priority, impact, due_date, attachments, status
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(Utc::now())
            .bind(&input.project_name)
            .bind(&input.department)
            .bind(&input.requester_name)
            .bind(&input.requester_email)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.impact)
            .bind(input.due_date)
            .bind(input.attachments.as_deref())
            .bind(TicketStatus::Submitted.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a ticket by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = ?");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tickets matching every supplied filter, most urgent first.
    pub async fn list(
        pool: &SqlitePool,
        filter: &TicketFilter,
    ) -> Result<Vec<Ticket>, sqlx::Error> {
        let status = active_filter(filter.status.as_deref());
        let department = active_filter(filter.department.as_deref());
        // Blank search is no search; otherwise the text is matched as typed,
        // surrounding spaces included.
        let search = filter
            .search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(like_pattern);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        if status.is_some() {
            conditions.push("status = ?");
        }
        if department.is_some() {
            conditions.push("department = ?");
        }
        if search.is_some() {
            conditions.push(
                "(project_name LIKE ? ESCAPE '\\' \
                  OR description LIKE ? ESCAPE '\\' \
                  OR requester_name LIKE ? ESCAPE '\\' \
                  OR requester_email LIKE ? ESCAPE '\\')",
            );
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM tickets {where_clause} ORDER BY {LIST_ORDER}");
        let mut q = sqlx::query_as::<_, Ticket>(&query);

        // Bind dynamic parameters in order.
        if let Some(status) = status {
            q = q.bind(status);
        }
        if let Some(department) = department {
            q = q.bind(department);
        }
        if let Some(ref pattern) = search {
            for _ in 0..4 {
                q = q.bind(pattern.clone());
            }
        }

        q.fetch_all(pool).await
    }

    /// Set the status unconditionally. The manager comment is overwritten
    /// only when `comment` is `Some`.
    ///
    /// Returns `None` if no ticket has this ID.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: TicketStatus,
        comment: Option<&str>,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                status = ?,
                manager_comment = COALESCE(?, manager_comment)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(status.as_str())
            .bind(comment)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a triage estimate and move the ticket to
    /// `Pending Manager Approval`, all in one write.
    ///
    /// Returns `None` if no ticket has this ID.
    pub async fn set_triage(
        pool: &SqlitePool,
        id: DbId,
        hours: Option<f64>,
        notes: Option<&str>,
        triaged_by: &str,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                estimate_hours = ?,
                estimate_notes = ?,
                triaged_by = ?,
                triaged_at = ?,
                status = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(hours)
            .bind(notes)
            .bind(triaged_by)
            .bind(Utc::now())
            .bind(TicketStatus::PendingManagerApproval.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tickets, newest ID first, for CSV export.
    pub async fn list_for_export(pool: &SqlitePool) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets ORDER BY id DESC");
        sqlx::query_as::<_, Ticket>(&query).fetch_all(pool).await
    }

    /// Count tickets per stored status, ordered by status label.
    pub async fn count_by_status(pool: &SqlitePool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM tickets GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}

/// Wrap `text` for a literal, case-insensitive `LIKE ... ESCAPE '\'` match.
fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
