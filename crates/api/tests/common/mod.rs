#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use intake_api::auth::jwt::JwtConfig;
use intake_api::auth::pin::AccessConfig;
use intake_api::config::ServerConfig;
use intake_api::router::build_app_router;
use intake_api::state::AppState;
use intake_core::workflow::TransitionPolicy;

pub const REVIEWER_PIN: &str = "2468";
pub const MANAGER_PIN: &str = "1234";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// the default PINs, and the permissive decision policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        decision_policy: TransitionPolicy::Permissive,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        access: AccessConfig::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Same as [`build_test_app`] with a different decision policy.
pub fn build_test_app_with_policy(pool: SqlitePool, policy: TransitionPolicy) -> Router {
    let config = ServerConfig {
        decision_policy: policy,
        ..test_config()
    };
    build_app_router(AppState::new(pool, config))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

/// POST with no body and no content type.
pub async fn post_empty_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the full response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Domain helpers
// ---------------------------------------------------------------------------

/// Unlock `role` with `pin` and return the access token.
pub async fn unlock(app: Router, role: &str, pin: &str) -> String {
    let body = serde_json::json!({ "role": role, "pin": pin });
    let response = post_json(app, "/api/v1/auth/unlock", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn reviewer_token(app: Router) -> String {
    unlock(app, "reviewer", REVIEWER_PIN).await
}

pub async fn manager_token(app: Router) -> String {
    unlock(app, "manager", MANAGER_PIN).await
}

/// A complete submission body.
pub fn submission(project_name: &str, priority: &str) -> Value {
    serde_json::json!({
        "project_name": project_name,
        "department": "Finance",
        "requester_name": "Dana Whitfield",
        "requester_email": "dana@example.com",
        "description": "Automate the month-end reconciliation",
        "priority": priority,
    })
}

/// Submit a ticket through the API and return its id.
pub async fn submit(app: Router, project_name: &str, priority: &str) -> i64 {
    let response = post_json(app, "/api/v1/tickets", submission(project_name, priority)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
