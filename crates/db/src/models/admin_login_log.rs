//! Admin login audit log model (account variant).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the append-only `admin_login_logs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminLoginLog {
    pub id: DbId,
    /// Identity provider's user id, opaque to this service.
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub session_info: Option<serde_json::Value>,
    pub login_timestamp: Timestamp,
}

/// DTO for recording an admin-panel entry.
#[derive(Debug, Deserialize)]
pub struct CreateAdminLoginLog {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub session_info: Option<serde_json::Value>,
}

/// Query filters for the login history endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AdminLoginLogQuery {
    pub limit: Option<i64>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}
