//! Emergency alert handlers.
//!
//! Alerts have no generic replace/delete: they are soft-deleted, one at a
//! time via dismiss or wholesale via clear. The public list reuses the
//! generic board handler and is active-only by construction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_db::models::alert::{Alert, CreateAlert};
use dispatch_db::resource::BoardResource;

use crate::error::{AppError, AppResult};
use crate::middleware::session::AdminSession;
use crate::state::AppState;

/// POST /api/alerts
///
/// Raise a new alert. New alerts are always active. 201 with an empty body.
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateAlert>,
) -> AppResult<StatusCode> {
    Alert::validate(&input)?;
    Alert::create(&state.pool, &input, &session.actor).await?;
    state.broadcaster.notify::<Alert>().await;

    tracing::info!(
        severity = input.severity_level.as_deref().unwrap_or_default(),
        actor = %session.actor.email,
        "Emergency alert raised"
    );
    Ok(StatusCode::CREATED)
}

/// PUT /api/alerts/{id}/dismiss
///
/// Soft-delete one alert. The row is kept for audit history; dismissing a
/// nonexistent id is 404. 200 with an empty body.
pub async fn dismiss(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let affected = Alert::dismiss(&state.pool, id, &session.actor).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: Alert::ENTITY,
            id,
        }));
    }
    state.broadcaster.notify::<Alert>().await;

    tracing::info!(id, actor = %session.actor.email, "Emergency alert dismissed");
    Ok(StatusCode::OK)
}

/// POST /api/alerts/clear
///
/// Soft-delete every active alert. Idempotent: clearing an empty board is
/// still 200, and still broadcasts. 200 with an empty body.
pub async fn clear_all(
    session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    let cleared = Alert::clear_all(&state.pool).await?;
    state.broadcaster.notify::<Alert>().await;

    tracing::info!(cleared, actor = %session.actor.email, "Emergency alerts cleared");
    Ok(StatusCode::OK)
}
