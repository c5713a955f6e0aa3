//! Admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use dispatch_core::actor::Actor;

use crate::error::AppError;
use crate::state::AppState;

/// An admin session admitted by the configured gate.
///
/// Use this as an extractor parameter in any handler that mutates board
/// state:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<StatusCode> {
///     tracing::info!(actor = %session.actor.email, "handling admin request");
///     Ok(StatusCode::OK)
/// }
/// ```
///
/// Rejection maps to 401 via [`AppError`].
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Identity for audit stamping; the sentinel actor in PIN mode.
    pub actor: Actor,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = state.gate.verify_admin(parts).map_err(AppError::Core)?;
        Ok(AdminSession { actor })
    }
}
