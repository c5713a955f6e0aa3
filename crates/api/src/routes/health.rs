//! Root-level liveness endpoints (outside `/api`).

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET / — plain-text root check kept for uptime probes and humans.
async fn root_check() -> &'static str {
    "Dispatch API is Online"
}

/// GET /health — structured liveness response.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_check))
        .route("/health", get(health_check))
}
