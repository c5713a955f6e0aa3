//! The generic board resource contract.
//!
//! The five resource kinds are structurally identical (a table, a canonical
//! order, a broadcast event name, create/replace/delete against it), so the
//! shared shape lives here once and each kind supplies only its table
//! constants, its DTOs, and its insert/replace SQL. `list` and `delete`
//! have a single provided implementation.
//!
//! The alert kind implements only [`BoardResource`]: it has no generic
//! replace/delete (dismiss and clear-all are soft deletes, see
//! `repositories::alert`), and its `FILTER` restricts every read to active
//! rows.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use dispatch_core::actor::Actor;
use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;
use dispatch_core::validation::ValidationContext;

/// A resource kind that can be listed and broadcast.
#[async_trait]
pub trait BoardResource: Send + Sync + 'static {
    /// Backing table name.
    const TABLE: &'static str;
    /// Canonical list ordering, e.g. `"absence_date DESC"`.
    const ORDER_BY: &'static str;
    /// Optional row filter applied to every read (alerts: `active = TRUE`).
    const FILTER: Option<&'static str> = None;
    /// Broadcast event name (see `dispatch_core::channels`).
    const EVENT: &'static str;
    /// Display name used in not-found errors.
    const ENTITY: &'static str;
    /// Explicit column list for SELECTs.
    const COLUMNS: &'static str;

    /// Row type returned by `list` and pushed to subscribers.
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin;

    /// All rows of the kind in canonical order, honoring `FILTER`.
    async fn list(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error> {
        let query = match Self::FILTER {
            Some(filter) => format!(
                "SELECT {} FROM {} WHERE {} ORDER BY {}",
                Self::COLUMNS,
                Self::TABLE,
                filter,
                Self::ORDER_BY
            ),
            None => format!(
                "SELECT {} FROM {} ORDER BY {}",
                Self::COLUMNS,
                Self::TABLE,
                Self::ORDER_BY
            ),
        };
        sqlx::query_as::<_, Self::Row>(&query).fetch_all(pool).await
    }
}

/// A resource kind with the full generic create/replace/delete surface.
#[async_trait]
pub trait BoardCrud: BoardResource {
    /// Create DTO. Fields are `Option` so presence is checked by
    /// `validate_create`, not by deserialization.
    type Create: DeserializeOwned + Send + Sync + 'static;
    /// Full-record replace DTO.
    type Update: DeserializeOwned + Send + Sync + 'static;

    /// Required-field validation for creates.
    fn validate_create(input: &Self::Create, ctx: &ValidationContext) -> Result<(), CoreError>;

    /// Required-field validation for replaces.
    fn validate_update(input: &Self::Update, ctx: &ValidationContext) -> Result<(), CoreError>;

    /// Insert a new row, stamping both audit columns from `actor`.
    async fn insert(pool: &PgPool, input: &Self::Create, actor: &Actor)
        -> Result<(), sqlx::Error>;

    /// Replace every field except `id` and `created_by_*`, re-stamping
    /// `updated_by_*`. Returns the number of rows affected; zero means the
    /// id does not exist.
    async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &Self::Update,
        actor: &Actor,
    ) -> Result<u64, sqlx::Error>;

    /// Delete a row. Returns `false` (not an error) when the id is absent,
    /// keeping deletes idempotent.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", Self::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
