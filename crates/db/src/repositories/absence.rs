//! Board resource implementation for the `absences` table.

use async_trait::async_trait;
use sqlx::PgPool;

use dispatch_core::actor::Actor;
use dispatch_core::channels::EVENT_ABSENCES;
use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_core::validation::{require_text, ValidationContext};

use crate::models::absence::{Absence, CreateAbsence, UpdateAbsence};
use crate::resource::{BoardCrud, BoardResource};

/// Column list for absences queries.
const COLUMNS: &str = "id, badge_number, location_name, covering_badge_number, absence_date, \
    notes, created_by_email, created_by_name, updated_by_email, updated_by_name, \
    created_at, updated_at";

#[async_trait]
impl BoardResource for Absence {
    const TABLE: &'static str = "absences";
    const ORDER_BY: &'static str = "absence_date DESC";
    const EVENT: &'static str = EVENT_ABSENCES;
    const ENTITY: &'static str = "Absence";
    const COLUMNS: &'static str = COLUMNS;

    type Row = Absence;
}

#[async_trait]
impl BoardCrud for Absence {
    type Create = CreateAbsence;
    type Update = UpdateAbsence;

    fn validate_create(input: &CreateAbsence, _ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("badge_number", input.badge_number.as_deref())?;
        require_text("location_name", input.location_name.as_deref())
    }

    fn validate_update(input: &UpdateAbsence, _ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("badge_number", input.badge_number.as_deref())?;
        require_text("location_name", input.location_name.as_deref())?;
        if input.absence_date.is_none() {
            return Err(CoreError::Validation("absence_date is required".into()));
        }
        Ok(())
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateAbsence,
        actor: &Actor,
    ) -> Result<(), sqlx::Error> {
        let absence_date = input
            .absence_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        sqlx::query(
            "INSERT INTO absences
                (badge_number, location_name, covering_badge_number, absence_date, notes,
                 created_by_email, created_by_name, updated_by_email, updated_by_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(input.badge_number.as_deref())
        .bind(input.location_name.as_deref())
        .bind(input.covering_badge_number.as_deref())
        .bind(absence_date)
        .bind(input.notes.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(())
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAbsence,
        actor: &Actor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE absences SET
                badge_number = $2, location_name = $3, covering_badge_number = $4,
                absence_date = $5, notes = $6,
                updated_by_email = $7, updated_by_name = $8, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.badge_number.as_deref())
        .bind(input.location_name.as_deref())
        .bind(input.covering_badge_number.as_deref())
        .bind(input.absence_date)
        .bind(input.notes.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
