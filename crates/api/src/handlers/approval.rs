//! Handlers for manager decisions: approve, deny, and hold.

use axum::extract::{Path, State};
use axum::Json;
use intake_core::access::Grant;
use intake_core::types::DbId;
use intake_core::workflow::Decision;
use intake_db::models::ticket::Ticket;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body shared by the decision endpoints.
///
/// The body itself may be omitted. An absent or blank comment keeps whatever
/// comment the ticket already has.
#[derive(Debug, Default, Deserialize)]
pub struct DecisionRequest {
    pub comment: Option<String>,
}

async fn decide(
    state: &AppState,
    grant: &Grant,
    id: DbId,
    decision: Decision,
    input: Option<Json<DecisionRequest>>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    let Json(input) = input.unwrap_or_default();
    let ticket = state
        .workflow
        .manager_decide(grant, id, decision, input.comment.as_deref())
        .await?;
    Ok(Json(DataResponse { data: ticket }))
}

/// POST /api/v1/tickets/{id}/approve
pub async fn approve_ticket(
    RequireManager(grant): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<DecisionRequest>>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    decide(&state, &grant, id, Decision::Approve, input).await
}

/// POST /api/v1/tickets/{id}/deny
pub async fn deny_ticket(
    RequireManager(grant): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<DecisionRequest>>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    decide(&state, &grant, id, Decision::Deny, input).await
}

/// POST /api/v1/tickets/{id}/hold
pub async fn hold_ticket(
    RequireManager(grant): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    input: Option<Json<DecisionRequest>>,
) -> AppResult<Json<DataResponse<Ticket>>> {
    decide(&state, &grant, id, Decision::Hold, input).await
}
