//! Board resource implementation for the `notices` table.

use async_trait::async_trait;
use sqlx::PgPool;

use dispatch_core::actor::Actor;
use dispatch_core::channels::EVENT_NOTICES;
use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_core::validation::{require_text, ValidationContext};

use crate::models::notice::{CreateNotice, Notice, UpdateNotice};
use crate::resource::{BoardCrud, BoardResource};

/// Column list for notices queries.
const COLUMNS: &str = "id, notice_date, title, text_content, \
    created_by_email, created_by_name, updated_by_email, updated_by_name, \
    created_at, updated_at";

#[async_trait]
impl BoardResource for Notice {
    const TABLE: &'static str = "notices";
    const ORDER_BY: &'static str = "notice_date DESC";
    const EVENT: &'static str = EVENT_NOTICES;
    const ENTITY: &'static str = "Notice";
    const COLUMNS: &'static str = COLUMNS;

    type Row = Notice;
}

#[async_trait]
impl BoardCrud for Notice {
    type Create = CreateNotice;
    type Update = UpdateNotice;

    fn validate_create(input: &CreateNotice, _ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("title", input.title.as_deref())?;
        require_text("text_content", input.text_content.as_deref())
    }

    fn validate_update(input: &UpdateNotice, _ctx: &ValidationContext) -> Result<(), CoreError> {
        require_text("title", input.title.as_deref())?;
        require_text("text_content", input.text_content.as_deref())?;
        if input.notice_date.is_none() {
            return Err(CoreError::Validation("notice_date is required".into()));
        }
        Ok(())
    }

    async fn insert(pool: &PgPool, input: &CreateNotice, actor: &Actor) -> Result<(), sqlx::Error> {
        let notice_date = input
            .notice_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        sqlx::query(
            "INSERT INTO notices
                (notice_date, title, text_content,
                 created_by_email, created_by_name, updated_by_email, updated_by_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(notice_date)
        .bind(input.title.as_deref())
        .bind(input.text_content.as_deref())
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
        input: &UpdateNotice,
        actor: &Actor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notices SET
                notice_date = $2, title = $3, text_content = $4,
                updated_by_email = $5, updated_by_name = $6, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.notice_date)
        .bind(input.title.as_deref())
        .bind(input.text_content.as_deref())
        .bind(&actor.email)
        .bind(&actor.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
