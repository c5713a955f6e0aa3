pub mod board;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use dispatch_db::models::equipment::Equipment;
use dispatch_db::models::notice::Notice;
use dispatch_db::models::on_call::OnCallStaff;

use crate::config::{AdminAuthMode, ServerConfig};
use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                       WebSocket subscription (public)
///
/// /absences                 list (?on=YYYY-MM-DD), create
/// /absences/{id}            replace, delete
/// /equipment                list, create
/// /equipment/{id}           replace, delete
/// /oncall                   list, create
/// /oncall/{id}              replace, delete
/// /notices                  list, create
/// /notices/{id}             replace, delete
///
/// /alerts                   active-only list, create
/// /alerts/{id}/dismiss      soft-delete one (PUT)
/// /alerts/clear             soft-delete all (POST)
///
/// PIN mode only:
/// /verify-pin               shared-PIN check (POST, public)
///
/// Account mode only:
/// /admin-login              record admin-panel entry (POST)
/// /admin-login-logs         login history (GET)
/// ```
///
/// Lists and the WebSocket are public; every mutation goes through the
/// configured session gate. The two gate variants expose disjoint
/// endpoints and are never mounted together.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/absences", board::absences_router())
        .nest("/equipment", board::board_router::<Equipment>())
        .nest("/oncall", board::board_router::<OnCallStaff>())
        .nest("/notices", board::board_router::<Notice>())
        .nest("/alerts", board::alerts_router());

    match config.auth_mode {
        AdminAuthMode::Pin => router.route("/verify-pin", post(handlers::auth::verify_pin)),
        AdminAuthMode::Account => router
            .route("/admin-login", post(handlers::admin_login::record_login))
            .route("/admin-login-logs", get(handlers::admin_login::list_logs)),
    }
}
