//! Bulletin notice model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dispatch_core::types::{DbId, Timestamp};

/// A row from the `notices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notice {
    pub id: DbId,
    pub notice_date: NaiveDate,
    pub title: String,
    pub text_content: String,
    pub created_by_email: Option<String>,
    pub created_by_name: Option<String>,
    pub updated_by_email: Option<String>,
    pub updated_by_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for posting a notice. `notice_date` defaults to the current
/// calendar day when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateNotice {
    pub notice_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub text_content: Option<String>,
}

/// DTO for replacing a notice.
#[derive(Debug, Deserialize)]
pub struct UpdateNotice {
    pub notice_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub text_content: Option<String>,
}
