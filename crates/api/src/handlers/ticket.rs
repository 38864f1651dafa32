//! Handlers for the `/tickets` resource: submission, listing, summary, and
//! CSV export.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use intake_core::export::{render_csv, EXPORT_FILE_NAME, TICKET_EXPORT_COLUMNS};
use intake_core::submission::SubmissionInput;
use intake_core::ticket::{active_filter, Department, TicketStatus};
use intake_core::types::DbId;
use intake_db::models::ticket::{StatusCount, Ticket, TicketFilter};
use intake_db::repositories::TicketRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireManager, RequireReviewer, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tickets
///
/// Submit a new request. Open to anyone; returns 201 with the stored ticket.
pub async fn submit_ticket(
    State(state): State<AppState>,
    Json(input): Json<SubmissionInput>,
) -> AppResult<impl IntoResponse> {
    let ticket = state.workflow.submit(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}

/// GET /api/v1/tickets?status=&department=&search=
///
/// Manager dashboard listing. Status and department must be known labels
/// (or `(all)`); unknown values are rejected rather than silently matching
/// nothing.
pub async fn list_tickets(
    RequireManager(_grant): RequireManager,
    State(state): State<AppState>,
    Query(filter): Query<TicketFilter>,
) -> AppResult<Json<DataResponse<Vec<Ticket>>>> {
    if let Some(status) = active_filter(filter.status.as_deref()) {
        status.parse::<TicketStatus>()?;
    }
    if let Some(department) = active_filter(filter.department.as_deref()) {
        department.parse::<Department>()?;
    }

    let tickets = TicketRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: tickets }))
}

/// GET /api/v1/tickets/triage-queue
///
/// Tickets awaiting a reviewer, most urgent first.
pub async fn triage_queue(
    RequireReviewer(_grant): RequireReviewer,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Ticket>>>> {
    let filter = TicketFilter::with_status(TicketStatus::Submitted.as_str());
    let tickets = TicketRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: tickets }))
}

/// GET /api/v1/tickets/{id}
pub async fn get_ticket(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    let ticket = state.workflow.find(id).await?;
    Ok(Json(DataResponse { data: ticket }))
}

/// GET /api/v1/tickets/summary
///
/// Ticket counts per status.
pub async fn ticket_summary(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StatusCount>>>> {
    let counts = TicketRepo::count_by_status(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

/// GET /api/v1/tickets/export
///
/// Every ticket as a CSV attachment, newest first.
pub async fn export_tickets(
    RequireManager(grant): RequireManager,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tickets = TicketRepo::list_for_export(&state.pool).await?;
    let body = render_csv(TICKET_EXPORT_COLUMNS, &tickets)?;

    tracing::info!(actor = %grant.actor, rows = tickets.len(), "Tickets exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}
