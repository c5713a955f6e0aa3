//! The session gate guarding the admin surface.
//!
//! Two mutually exclusive strategies exist across deployments and are never
//! combined: a shared-PIN marker check ([`PinGate`]) and a delegated
//! account session ([`AccountGate`]). The active strategy is selected by
//! `ADMIN_AUTH_MODE` at startup and carried in `AppState` as a
//! `Arc<dyn SessionGate>`.
//!
//! Admin-route access is a two-state machine: Unauthenticated →
//! (credential check passes) → Authenticated → (logout or marker/session
//! expiry) → Unauthenticated. There is no refresh or renewal flow.

use axum::http::header::COOKIE;
use axum::http::request::Parts;

use dispatch_core::actor::Actor;
use dispatch_core::error::CoreError;

use crate::config::{AdminAuthMode, ServerConfig};

/// Name of the client-side session marker cookie (PIN variant). The client
/// sets it with a 24-hour expiry and site-wide path after a successful
/// PIN check.
pub const SESSION_COOKIE: &str = "dispatch_session";

/// Identity headers terminated by the account provider's edge (account
/// variant).
pub const HEADER_USER_EMAIL: &str = "x-user-email";
pub const HEADER_USER_NAME: &str = "x-user-name";

/// Decides whether a request may reach the admin surface, and with which
/// actor identity for audit stamping.
pub trait SessionGate: Send + Sync {
    fn verify_admin(&self, parts: &Parts) -> Result<Actor, CoreError>;
}

/// Build the gate selected by configuration.
pub fn from_config(config: &ServerConfig) -> std::sync::Arc<dyn SessionGate> {
    match config.auth_mode {
        AdminAuthMode::Pin => std::sync::Arc::new(PinGate),
        AdminAuthMode::Account => std::sync::Arc::new(AccountGate),
    }
}

/// Shared-PIN strategy: admits any request presenting the session marker
/// cookie, and yields the sentinel actor (a PIN carries no identity).
///
/// KNOWN WEAKNESS, kept deliberately: the marker is a plain cookie anyone
/// can set, there is no rate limiting and no lockout. This gate is a
/// convenience for a physically controlled kiosk, not authentication.
pub struct PinGate;

impl SessionGate for PinGate {
    fn verify_admin(&self, parts: &Parts) -> Result<Actor, CoreError> {
        match cookie_value(parts, SESSION_COOKIE) {
            Some("true") => Ok(Actor::unknown()),
            _ => Err(CoreError::Unauthorized(
                "Admin session marker missing or expired".into(),
            )),
        }
    }
}

/// Delegated-session strategy: identity is established by the external
/// account provider; this gate only reads the provider-terminated identity
/// headers and exposes them as the audit actor.
pub struct AccountGate;

impl SessionGate for AccountGate {
    fn verify_admin(&self, parts: &Parts) -> Result<Actor, CoreError> {
        let email = header_value(parts, HEADER_USER_EMAIL).ok_or_else(|| {
            CoreError::Unauthorized("No account session; sign in to access the admin panel".into())
        })?;
        let name = header_value(parts, HEADER_USER_NAME).unwrap_or(email);
        Ok(Actor::named(email, name))
    }
}

/// Value of a cookie in the request's `Cookie` header(s), if present.
fn cookie_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then_some(value)
        })
}

/// Non-blank value of a request header, if present.
fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
