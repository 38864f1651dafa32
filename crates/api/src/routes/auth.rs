//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /unlock   -> unlock (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/unlock", post(auth::unlock))
}
