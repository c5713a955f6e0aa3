//! Shared-PIN verification endpoint (PIN variant only).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Request body for a PIN check.
#[derive(Debug, Deserialize)]
pub struct VerifyPinRequest {
    pub pin: Option<String>,
}

/// Result of a PIN check. No session marker is issued server-side; the
/// client sets its own `dispatch_session` cookie on `granted = true`.
#[derive(Debug, Serialize)]
pub struct VerifyPinResponse {
    pub granted: bool,
}

/// POST /api/verify-pin
///
/// Compare the candidate against the deployment's shared PIN. Always 200;
/// any wrong or missing candidate is `granted = false`.
///
/// KNOWN WEAKNESS, kept deliberately: no rate limiting, no lockout, and
/// the marker the client sets afterwards is forgeable. This is a kiosk
/// gate, not authentication.
pub async fn verify_pin(
    State(state): State<AppState>,
    Json(input): Json<VerifyPinRequest>,
) -> Json<VerifyPinResponse> {
    let granted = input.pin.as_deref() == Some(state.config.admin_pin.as_str());

    // The candidate itself is never logged.
    if granted {
        tracing::info!("Admin PIN accepted");
    } else {
        tracing::warn!("Admin PIN rejected");
    }

    Json(VerifyPinResponse { granted })
}
