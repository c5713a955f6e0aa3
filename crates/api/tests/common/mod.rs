#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dispatch_api::broadcast::Broadcaster;
use dispatch_api::config::{AdminAuthMode, ServerConfig};
use dispatch_api::gate;
use dispatch_api::router::build_app_router;
use dispatch_api::state::AppState;
use dispatch_api::ws::WsManager;
use dispatch_core::validation::ValidationContext;

/// PIN used by the test configuration.
pub const TEST_PIN: &str = "4321";

/// Build a test `ServerConfig` with safe defaults for the given gate mode.
pub fn test_config(auth_mode: AdminAuthMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        auth_mode,
        admin_pin: TEST_PIN.to_string(),
        validation: ValidationContext::default(),
    }
}

/// Build application state around the given pool, returning the WebSocket
/// manager separately so tests can attach fake subscribers.
pub fn build_test_state(pool: PgPool, config: ServerConfig) -> (AppState, Arc<WsManager>) {
    let ws_manager = Arc::new(WsManager::new());
    let broadcaster = Arc::new(Broadcaster::new(pool.clone(), Arc::clone(&ws_manager)));
    let gate = gate::from_config(&config);

    let state = AppState {
        pool,
        config: Arc::new(config),
        ws_manager: Arc::clone(&ws_manager),
        broadcaster,
        gate,
    };
    (state, ws_manager)
}

/// Build the full application router (PIN gate) with all middleware
/// layers, mirroring the router construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config(AdminAuthMode::Pin);
    let (state, _) = build_test_state(pool, config.clone());
    build_app_router(state, &config)
}

/// Like [`build_test_app`], but also returns the WebSocket manager so the
/// test can observe broadcasts.
pub fn build_test_app_with_ws(pool: PgPool) -> (Router, Arc<WsManager>) {
    let config = test_config(AdminAuthMode::Pin);
    let (state, ws_manager) = build_test_state(pool, config.clone());
    (build_app_router(state, &config), ws_manager)
}

/// Build the application router with the account gate.
pub fn build_account_test_app(pool: PgPool) -> Router {
    let config = test_config(AdminAuthMode::Account);
    let (state, _) = build_test_state(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET without credentials (the public surface).
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// POST JSON without credentials.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// POST JSON with the PIN-mode admin session marker.
pub async fn admin_post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("cookie", "dispatch_session=true")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// PUT JSON with the PIN-mode admin session marker.
pub async fn admin_put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header("cookie", "dispatch_session=true")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// DELETE with the PIN-mode admin session marker.
pub async fn admin_delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("cookie", "dispatch_session=true")
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Request with the account provider's identity headers.
pub async fn account_request_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    email: &str,
    name: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-user-email", email)
            .header("x-user-name", name)
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}
