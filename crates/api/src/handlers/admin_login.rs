//! Admin login audit endpoints (account variant only).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use dispatch_db::models::admin_login_log::{
    AdminLoginLog, AdminLoginLogQuery, CreateAdminLoginLog,
};
use dispatch_db::repositories::AdminLoginLogRepo;

use crate::error::AppResult;
use crate::middleware::session::AdminSession;
use crate::state::AppState;

/// POST /api/admin-login
///
/// Append an admin-panel entry to the audit trail. The client fires and
/// forgets this call: a failure here never blocks admin access, it only
/// loses one audit row.
pub async fn record_login(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateAdminLoginLog>,
) -> AppResult<StatusCode> {
    AdminLoginLogRepo::record(&state.pool, &input).await?;

    tracing::info!(
        actor = %session.actor.email,
        user_id = input.user_id.as_deref().unwrap_or_default(),
        "Admin panel entry logged"
    );
    Ok(StatusCode::CREATED)
}

/// GET /api/admin-login-logs?limit=&user_id=&user_email=
///
/// Login history, newest first, optionally filtered.
pub async fn list_logs(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<AdminLoginLogQuery>,
) -> AppResult<Json<Vec<AdminLoginLog>>> {
    let logs = AdminLoginLogRepo::query(&state.pool, &params).await?;
    Ok(Json(logs))
}
