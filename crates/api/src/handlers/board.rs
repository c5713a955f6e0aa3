//! Generic handlers shared by every plain CRUD board kind.
//!
//! Instantiated per kind by the route builders (`list::<Equipment>`,
//! `create::<Notice>`, ...). Each mutation validates, writes, then hands
//! the kind to the broadcast coordinator before answering the caller with
//! an empty body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_db::resource::{BoardCrud, BoardResource};

use crate::error::{AppError, AppResult};
use crate::middleware::session::AdminSession;
use crate::state::AppState;

/// GET /api/{kind}
///
/// Full collection in the kind's canonical order. Public: the dashboard
/// uses this on mount and as its reconnect fallback.
pub async fn list<R: BoardResource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Row>>> {
    let rows = R::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/{kind}
///
/// Validate, insert, broadcast. 201 with an empty body.
pub async fn create<R: BoardCrud>(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<R::Create>,
) -> AppResult<StatusCode> {
    R::validate_create(&input, &state.config.validation)?;
    R::insert(&state.pool, &input, &session.actor).await?;
    state.broadcaster.notify::<R>().await;

    tracing::info!(
        entity = R::ENTITY,
        actor = %session.actor.email,
        "Board record created"
    );
    Ok(StatusCode::CREATED)
}

/// PUT /api/{kind}/{id}
///
/// Full-record replace. Replacing a nonexistent id is 404 (the UPDATE
/// affects zero rows and nothing is broadcast). 200 with an empty body.
pub async fn replace<R: BoardCrud>(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<R::Update>,
) -> AppResult<StatusCode> {
    R::validate_update(&input, &state.config.validation)?;
    let affected = R::replace(&state.pool, id, &input, &session.actor).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }));
    }
    state.broadcaster.notify::<R>().await;

    tracing::info!(
        entity = R::ENTITY,
        id,
        actor = %session.actor.email,
        "Board record replaced"
    );
    Ok(StatusCode::OK)
}

/// DELETE /api/{kind}/{id}
///
/// Idempotent: deleting an id that is already gone still answers 200, and
/// still broadcasts the (unchanged) collection. 200 with an empty body.
pub async fn remove<R: BoardCrud>(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = R::delete(&state.pool, id).await?;
    state.broadcaster.notify::<R>().await;

    tracing::info!(
        entity = R::ENTITY,
        id,
        deleted,
        actor = %session.actor.email,
        "Board record delete"
    );
    Ok(StatusCode::OK)
}
