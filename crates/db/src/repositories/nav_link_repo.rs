//! Repository for the `nav_links` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::nav_link::{CreateNavLink, NavLink, UpdateNavLink};

const COLUMNS: &str = "id, label, action_type, action_value, sort_order, is_active, \
                       created_at, updated_at";

pub struct NavLinkRepo;

impl NavLinkRepo {
    pub async fn create(pool: &PgPool, input: &CreateNavLink) -> Result<NavLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO nav_links (label, action_type, action_value, sort_order, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NavLink>(&query)
            .bind(&input.label)
            .bind(&input.action_type)
            .bind(&input.action_value)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<NavLink>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM nav_links ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM nav_links WHERE is_active = true ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, NavLink>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNavLink,
    ) -> Result<Option<NavLink>, sqlx::Error> {
        let query = format!(
            "UPDATE nav_links SET \
                label = COALESCE($2, label), \
                action_type = COALESCE($3, action_type), \
                action_value = COALESCE($4, action_value), \
                sort_order = COALESCE($5, sort_order), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NavLink>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.action_type)
            .bind(&input.action_value)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM nav_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
