//! Handler for the reviewer triage step.

use axum::extract::{Path, State};
use axum::Json;
use intake_core::types::DbId;
use intake_db::models::ticket::Ticket;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireReviewer;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /tickets/{id}/triage`.
#[derive(Debug, Default, Deserialize)]
pub struct TriageRequest {
    pub estimate_hours: Option<f64>,
    pub estimate_notes: Option<String>,
}

/// POST /api/v1/tickets/{id}/triage
///
/// Attach an estimate and forward the ticket for manager approval. The body
/// may be omitted to forward without an estimate.
pub async fn triage_ticket(
    RequireReviewer(grant): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<TriageRequest>>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    let Json(input) = input.unwrap_or_default();
    let ticket = state
        .workflow
        .triage_forward(&grant, id, input.estimate_hours, input.estimate_notes.as_deref())
        .await?;
    Ok(Json(DataResponse { data: ticket }))
}
