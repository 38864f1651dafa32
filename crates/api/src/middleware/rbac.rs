//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. The role check happens again inside the workflow via [`Grant`], so
//! these extractors only decide which routes are reachable.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use intake_core::access::{Grant, Role};
use intake_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: Role,
) -> Result<Grant, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if user.role != role {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "{} access required",
            capitalize(role.as_str())
        ))));
    }
    Ok(user.grant())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Requires the `reviewer` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn triage(RequireReviewer(grant): RequireReviewer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireReviewer(pub Grant);

impl FromRequestParts<AppState> for RequireReviewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, Role::Reviewer)
            .await
            .map(RequireReviewer)
    }
}

/// Requires the `manager` role. Rejects with 403 Forbidden otherwise.
pub struct RequireManager(pub Grant);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, Role::Manager)
            .await
            .map(RequireManager)
    }
}

/// Requires any unlocked staff role.
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for routes
/// that both reviewers and managers may read.
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireStaff(user))
    }
}
