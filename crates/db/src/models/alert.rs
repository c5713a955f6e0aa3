//! Emergency alert model.
//!
//! Alerts are soft-deleted: dismiss and clear flip `active` to false and
//! the row is kept for audit history. Every public read is active-only.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `emergency_alerts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Alert {
    pub id: DbId,
    pub severity_level: String,
    pub title: String,
    pub active: bool,
    pub created_by_email: Option<String>,
    pub created_by_name: Option<String>,
    pub updated_by_email: Option<String>,
    pub updated_by_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for raising an alert. New alerts are always active.
#[derive(Debug, Deserialize)]
pub struct CreateAlert {
    pub severity_level: Option<String>,
    pub title: Option<String>,
}
