//! Repository for the `admins` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, last_login_at, created_at, updated_at";

/// Provides lookup and bootstrap operations for administrator accounts.
pub struct AdminRepo;

impl AdminRepo {
    /// Find an administrator by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE username = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Insert the very first administrator.
    ///
    /// Returns `None` when any administrator already exists. The table lock
    /// serializes concurrent bootstrap attempts so at most one can succeed.
    pub async fn create_first(
        pool: &PgPool,
        input: &CreateAdmin,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("LOCK TABLE admins IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO admins (username, password_hash) \
             SELECT $1, $2 WHERE NOT EXISTS (SELECT 1 FROM admins) \
             RETURNING {COLUMNS}"
        );
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(admin)
    }

    /// Stamp `last_login_at` with the current time.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admins SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
