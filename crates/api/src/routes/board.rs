//! Route builders for the board resource kinds.

use axum::routing::{get, post, put};
use axum::Router;

use dispatch_db::models::absence::Absence;
use dispatch_db::models::alert::Alert;
use dispatch_db::resource::BoardCrud;

use crate::handlers::{absences, alerts, board};
use crate::state::AppState;

/// Generic router for a plain CRUD kind.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn board_router<R: BoardCrud>() -> Router<AppState> {
    Router::new()
        .route("/", get(board::list::<R>).post(board::create::<R>))
        .route(
            "/{id}",
            put(board::replace::<R>).delete(board::remove::<R>),
        )
}

/// Absence routes: the generic CRUD surface with a bespoke list that
/// supports the big-screen calendar-day filter.
pub fn absences_router() -> Router<AppState> {
    Router::new()
        .route("/", get(absences::list).post(board::create::<Absence>))
        .route(
            "/{id}",
            put(board::replace::<Absence>).delete(board::remove::<Absence>),
        )
}

/// Alert routes: soft-delete operations instead of generic replace/delete.
///
/// ```text
/// GET    /              -> active-only list
/// POST   /              -> create
/// PUT    /{id}/dismiss  -> dismiss one
/// POST   /clear         -> clear all
/// ```
pub fn alerts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(board::list::<Alert>).post(alerts::create))
        .route("/{id}/dismiss", put(alerts::dismiss))
        .route("/clear", post(alerts::clear_all))
}
