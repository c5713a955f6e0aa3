//! Emergency alert operations.
//!
//! Alerts implement only the read side of the board contract: every public
//! list is active-only, and instead of generic replace/delete they are
//! soft-deleted via [`Alert::dismiss`] and [`Alert::clear_all`]. Dismissed
//! rows stay in the table for audit history.

use async_trait::async_trait;
use sqlx::PgPool;

use dispatch_core::actor::Actor;
use dispatch_core::channels::EVENT_ALERTS;
use dispatch_core::error::CoreError;
use dispatch_core::severity::Severity;
use dispatch_core::types::DbId;
use dispatch_core::validation::require_text;

use crate::models::alert::{Alert, CreateAlert};
use crate::resource::BoardResource;

/// Column list for emergency_alerts queries.
const COLUMNS: &str = "id, severity_level, title, active, \
    created_by_email, created_by_name, updated_by_email, updated_by_name, \
    created_at, updated_at";

#[async_trait]
impl BoardResource for Alert {
    const TABLE: &'static str = "emergency_alerts";
    const ORDER_BY: &'static str = "id DESC";
    // Dismissed alerts are invisible to every public read and to the
    // broadcast payload; only the table itself retains them.
    const FILTER: Option<&'static str> = Some("active = TRUE");
    const EVENT: &'static str = EVENT_ALERTS;
    const ENTITY: &'static str = "Alert";
    const COLUMNS: &'static str = COLUMNS;

    type Row = Alert;
}

impl Alert {
    /// Required-field validation for raising an alert.
    pub fn validate(input: &CreateAlert) -> Result<(), CoreError> {
        require_text("title", input.title.as_deref())?;
        match input.severity_level.as_deref() {
            Some(s) if Severity::parse(s).is_some() => Ok(()),
            _ => Err(CoreError::Validation(
                "severity_level must be one of: Low, Medium, High, Critical".into(),
            )),
        }
    }

    /// Insert a new, active alert.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAlert,
        actor: &Actor,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO emergency_alerts
                (severity_level, title, active,
                 created_by_email, created_by_name, updated_by_email, updated_by_name)
             VALUES ($1, $2, TRUE, $3, $4, $5, $6)",
        )
        .bind(input.severity_level.as_deref())
        .bind(input.title.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Deactivate a single alert. Returns the number of rows affected;
    /// zero means the id does not exist.
    pub async fn dismiss(pool: &PgPool, id: DbId, actor: &Actor) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE emergency_alerts SET
                active = FALSE, updated_by_email = $2, updated_by_name = $3,
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deactivate every active alert. Idempotent; returns how many rows
    /// were flipped.
    pub async fn clear_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE emergency_alerts SET active = FALSE, updated_at = now() WHERE active",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
