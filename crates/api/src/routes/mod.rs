pub mod auth;
pub mod health;
pub mod ticket;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /options                       intake form option lists (public)
///
/// /auth/unlock                   PIN -> role token (public)
///
/// /tickets                       submit (public), list (manager)
/// /tickets/triage-queue          submitted tickets (reviewer)
/// /tickets/summary               counts per status (staff)
/// /tickets/export                CSV download (manager)
/// /tickets/{id}                  get (staff)
/// /tickets/{id}/triage           forward with estimate (reviewer)
/// /tickets/{id}/approve          approve (manager)
/// /tickets/{id}/deny             deny (manager)
/// /tickets/{id}/hold             hold (manager)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::options::get_options))
        .nest("/auth", auth::router())
        .nest("/tickets", ticket::router())
}
