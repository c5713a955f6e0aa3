//! Board resource implementation for the `on_call_staff` table.

use async_trait::async_trait;
use sqlx::PgPool;

use dispatch_core::actor::Actor;
use dispatch_core::channels::EVENT_ONCALL;
use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_core::validation::{require_text, ValidationContext};

use crate::models::on_call::{CreateOnCallStaff, OnCallStaff, UpdateOnCallStaff};
use crate::resource::{BoardCrud, BoardResource};

/// Column list for on_call_staff queries.
const COLUMNS: &str = "id, department_name, person_name, phone_number, \
    created_by_email, created_by_name, updated_by_email, updated_by_name, \
    created_at, updated_at";

#[async_trait]
impl BoardResource for OnCallStaff {
    const TABLE: &'static str = "on_call_staff";
    // The roster reads top-down in the order departments were entered.
    const ORDER_BY: &'static str = "id ASC";
    const EVENT: &'static str = EVENT_ONCALL;
    const ENTITY: &'static str = "OnCallStaff";
    const COLUMNS: &'static str = COLUMNS;

    type Row = OnCallStaff;
}

#[async_trait]
impl BoardCrud for OnCallStaff {
    type Create = CreateOnCallStaff;
    type Update = UpdateOnCallStaff;

    fn validate_create(
        input: &CreateOnCallStaff,
        _ctx: &ValidationContext,
    ) -> Result<(), CoreError> {
        require_text("department_name", input.department_name.as_deref())?;
        require_text("person_name", input.person_name.as_deref())?;
        require_text("phone_number", input.phone_number.as_deref())
    }

    fn validate_update(
        input: &UpdateOnCallStaff,
        _ctx: &ValidationContext,
    ) -> Result<(), CoreError> {
        require_text("department_name", input.department_name.as_deref())?;
        require_text("person_name", input.person_name.as_deref())?;
        require_text("phone_number", input.phone_number.as_deref())
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateOnCallStaff,
        actor: &Actor,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO on_call_staff
                (department_name, person_name, phone_number,
                 created_by_email, created_by_name, updated_by_email, updated_by_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(input.department_name.as_deref())
        .bind(input.person_name.as_deref())
        .bind(input.phone_number.as_deref())
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
        input: &UpdateOnCallStaff,
        actor: &Actor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE on_call_staff SET
                department_name = $2, person_name = $3, phone_number = $4,
                updated_by_email = $5, updated_by_name = $6, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.department_name.as_deref())
        .bind(input.person_name.as_deref())
        .bind(input.phone_number.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
