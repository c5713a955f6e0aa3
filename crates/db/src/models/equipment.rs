//! Downed equipment model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `downed_equipment` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Equipment {
    pub id: DbId,
    pub equipment_type: String,
    pub equipment_id_number: String,
    pub title: String,
    /// One of the deployment's configured status vocabulary.
    pub status: String,
    pub notes: Option<String>,
    pub entry_date: NaiveDate,
    pub created_by_email: Option<String>,
    pub created_by_name: Option<String>,
    pub updated_by_email: Option<String>,
    pub updated_by_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for reporting a piece of equipment down.
#[derive(Debug, Deserialize)]
pub struct CreateEquipment {
    pub equipment_type: Option<String>,
    pub equipment_id_number: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for replacing an equipment record. `entry_date` is set by the
/// datastore on insert and never replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateEquipment {
    pub equipment_type: Option<String>,
    pub equipment_id_number: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
