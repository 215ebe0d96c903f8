//! Repository for the `complaints` table.

use portal_core::complaint::STATUS_PENDING;
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::complaint::{Complaint, CreateComplaint};

const COLUMNS: &str = "id, content, contact_info, origin, status, created_at, updated_at";

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new complaint in the `pending` status.
    pub async fn create(pool: &PgPool, input: &CreateComplaint) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (content, contact_info, origin, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.content)
            .bind(&input.contact_info)
            .bind(&input.origin)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// List complaints newest first, optionally restricted to one status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Set the status of a complaint.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("UPDATE complaints SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
