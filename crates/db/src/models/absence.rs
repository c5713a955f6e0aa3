//! Officer absence model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `absences` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Absence {
    pub id: DbId,
    pub badge_number: String,
    pub location_name: String,
    /// Free-text reference to the covering officer; not an enforced join.
    pub covering_badge_number: Option<String>,
    pub absence_date: NaiveDate,
    pub notes: Option<String>,
    pub created_by_email: Option<String>,
    pub created_by_name: Option<String>,
    pub updated_by_email: Option<String>,
    pub updated_by_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an absence. `absence_date` defaults to the current
/// calendar day when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateAbsence {
    pub badge_number: Option<String>,
    pub location_name: Option<String>,
    pub covering_badge_number: Option<String>,
    pub absence_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for replacing an absence.
#[derive(Debug, Deserialize)]
pub struct UpdateAbsence {
    pub badge_number: Option<String>,
    pub location_name: Option<String>,
    pub covering_badge_number: Option<String>,
    pub absence_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
