//! Repository for the append-only `admin_login_logs` table.

use sqlx::PgPool;

use crate::models::admin_login_log::{AdminLoginLog, AdminLoginLogQuery, CreateAdminLoginLog};

/// Column list for admin_login_logs queries.
const COLUMNS: &str = "id, user_id, user_email, ip_address, user_agent, session_info, \
    login_timestamp";

/// Default page size for login history queries.
const DEFAULT_LIMIT: i64 = 100;
/// Upper bound on a caller-supplied limit.
const MAX_LIMIT: i64 = 1000;

/// Append-only audit trail of admin-panel entries. No update or delete.
pub struct AdminLoginLogRepo;

impl AdminLoginLogRepo {
    /// Record an admin-panel entry.
    pub async fn record(pool: &PgPool, input: &CreateAdminLoginLog) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO admin_login_logs
                (user_id, user_email, ip_address, user_agent, session_info)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(input.user_id.as_deref())
        .bind(input.user_email.as_deref())
        .bind(input.ip_address.as_deref())
        .bind(input.user_agent.as_deref())
        .bind(input.session_info.as_ref())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Query login history, newest first, optionally filtered by user id
    /// and/or email.
    pub async fn query(
        pool: &PgPool,
        params: &AdminLoginLogQuery,
    ) -> Result<Vec<AdminLoginLog>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut next_param = 1;

        if params.user_id.is_some() {
            conditions.push(format!("user_id = ${next_param}"));
            next_param += 1;
        }
        if params.user_email.is_some() {
            conditions.push(format!("user_email = ${next_param}"));
            next_param += 1;
        }

        let mut query = format!("SELECT {COLUMNS} FROM admin_login_logs");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(&format!(
            " ORDER BY login_timestamp DESC LIMIT ${next_param}"
        ));

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut q = sqlx::query_as::<_, AdminLoginLog>(&query);
        if let Some(ref user_id) = params.user_id {
            q = q.bind(user_id);
        }
        if let Some(ref user_email) = params.user_email {
            q = q.bind(user_email);
        }
        q.bind(limit).fetch_all(pool).await
    }
}
