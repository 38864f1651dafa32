//! Handlers for the `/auth` resource (PIN unlock).

use axum::extract::State;
use axum::Json;
use intake_core::access::Role;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/unlock`.
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub role: Role,
    pub pin: String,
}

/// Successful unlock response.
#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub role: Role,
    /// Name recorded on actions taken with this token.
    pub actor: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/unlock
///
/// Exchange a role PIN for a role token. A wrong PIN returns 401.
pub async fn unlock(
    State(state): State<AppState>,
    Json(input): Json<UnlockRequest>,
) -> AppResult<Json<UnlockResponse>> {
    let grant = state
        .config
        .access
        .unlock(input.role, &input.pin)
        .inspect_err(|_| {
            tracing::warn!(role = %input.role, "Rejected unlock attempt");
        })?;

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(grant.role, &grant.actor, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(role = %grant.role, actor = %grant.actor, "Role unlocked");

    Ok(Json(UnlockResponse {
        access_token,
        expires_in: jwt.expires_in_secs(),
        role: grant.role,
        actor: grant.actor,
    }))
}
