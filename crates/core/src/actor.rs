//! The identity attributed to a create/update operation for audit stamping.

/// Sentinel used when the session gate grants access without an identity
/// (the PIN variant has no notion of who is behind the kiosk).
pub const UNKNOWN_ACTOR: &str = "unknown";

/// The authenticated (or sentinel) identity behind an admin mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub email: String,
    pub name: String,
}

impl Actor {
    /// An actor with a real identity, from the account session provider.
    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// The sentinel actor used when no identity is available.
    pub fn unknown() -> Self {
        Self {
            email: UNKNOWN_ACTOR.to_string(),
            name: UNKNOWN_ACTOR.to_string(),
        }
    }

    /// Whether this actor carries a real identity.
    pub fn is_known(&self) -> bool {
        self.email != UNKNOWN_ACTOR
    }
}
