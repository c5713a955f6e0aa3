//! On-call staff model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `on_call_staff` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OnCallStaff {
    pub id: DbId,
    pub department_name: String,
    pub person_name: String,
    pub phone_number: String,
    pub created_by_email: Option<String>,
    pub created_by_name: Option<String>,
    pub updated_by_email: Option<String>,
    pub updated_by_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an on-call entry.
#[derive(Debug, Deserialize)]
pub struct CreateOnCallStaff {
    pub department_name: Option<String>,
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
}

/// DTO for replacing an on-call entry.
#[derive(Debug, Deserialize)]
pub struct UpdateOnCallStaff {
    pub department_name: Option<String>,
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
}
