//! Route definitions for the `/tickets` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{approval, ticket, triage};
use crate::state::AppState;

/// Routes mounted at `/tickets`.
///
/// ```text
/// POST   /                  -> submit_ticket (public)
/// GET    /                  -> list_tickets (manager)
/// GET    /triage-queue      -> triage_queue (reviewer)
/// GET    /summary           -> ticket_summary (staff)
/// GET    /export            -> export_tickets (manager)
/// GET    /{id}              -> get_ticket (staff)
/// POST   /{id}/triage       -> triage_ticket (reviewer)
/// POST   /{id}/approve      -> approve_ticket (manager)
/// POST   /{id}/deny         -> deny_ticket (manager)
/// POST   /{id}/hold         -> hold_ticket (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(ticket::submit_ticket).get(ticket::list_tickets))
        .route("/triage-queue", get(ticket::triage_queue))
        .route("/summary", get(ticket::ticket_summary))
        .route("/export", get(ticket::export_tickets))
        .route("/{id}", get(ticket::get_ticket))
        .route("/{id}/triage", post(triage::triage_ticket))
        .route("/{id}/approve", post(approval::approve_ticket))
        .route("/{id}/deny", post(approval::deny_ticket))
        .route("/{id}/hold", post(approval::hold_ticket))
}
