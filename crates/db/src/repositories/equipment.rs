//! Board resource implementation for the `downed_equipment` table.

use async_trait::async_trait;
use sqlx::PgPool;

use dispatch_core::actor::Actor;
use dispatch_core::channels::EVENT_EQUIPMENT;
use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_core::validation::{require_status, require_text, ValidationContext};

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use crate::resource::{BoardCrud, BoardResource};

/// Column list for downed_equipment queries.
const COLUMNS: &str = "id, equipment_type, equipment_id_number, title, status, notes, \
    entry_date, created_by_email, created_by_name, updated_by_email, updated_by_name, \
    created_at, updated_at";

#[async_trait]
impl BoardResource for Equipment {
    const TABLE: &'static str = "downed_equipment";
    const ORDER_BY: &'static str = "id DESC";
    const EVENT: &'static str = EVENT_EQUIPMENT;
    const ENTITY: &'static str = "Equipment";
    const COLUMNS: &'static str = COLUMNS;

    type Row = Equipment;
}

#[async_trait]
impl BoardCrud for Equipment {
    type Create = CreateEquipment;
    type Update = UpdateEquipment;

    fn validate_create(input: &CreateEquipment, ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("equipment_type", input.equipment_type.as_deref())?;
        require_text("equipment_id_number", input.equipment_id_number.as_deref())?;
        require_text("title", input.title.as_deref())?;
        require_status(input.status.as_deref(), &ctx.equipment_statuses)
    }

    fn validate_update(input: &UpdateEquipment, ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("equipment_type", input.equipment_type.as_deref())?;
        require_text("equipment_id_number", input.equipment_id_number.as_deref())?;
        require_text("title", input.title.as_deref())?;
        require_status(input.status.as_deref(), &ctx.equipment_statuses)
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateEquipment,
        actor: &Actor,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO downed_equipment
                (equipment_type, equipment_id_number, title, status, notes,
                 created_by_email, created_by_name, updated_by_email, updated_by_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(input.equipment_type.as_deref())
        .bind(input.equipment_id_number.as_deref())
        .bind(input.title.as_deref())
        .bind(input.status.as_deref())
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
        input: &UpdateEquipment,
        actor: &Actor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE downed_equipment SET
                equipment_type = $2, equipment_id_number = $3, title = $4,
                status = $5, notes = $6,
                updated_by_email = $7, updated_by_name = $8, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.equipment_type.as_deref())
        .bind(input.equipment_id_number.as_deref())
        .bind(input.title.as_deref())
        .bind(input.status.as_deref())
        .bind(input.notes.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
