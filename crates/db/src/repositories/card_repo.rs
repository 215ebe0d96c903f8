//! Repository for the `action_cards` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::{ActionCard, CreateActionCard, UpdateActionCard};

const COLUMNS: &str = "id, title, image_url, action_type, action_value, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for action cards.
pub struct CardRepo;

impl CardRepo {
    pub async fn create(pool: &PgPool, input: &CreateActionCard) -> Result<ActionCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO action_cards \
                (title, image_url, action_type, action_value, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionCard>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.action_type)
            .bind(&input.action_value)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List cards ordered by `sort_order`, then `id`.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<ActionCard>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM action_cards ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM action_cards WHERE is_active = true \
                 ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, ActionCard>(&query).fetch_all(pool).await
    }

    /// Update a card. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActionCard,
    ) -> Result<Option<ActionCard>, sqlx::Error> {
        let query = format!(
            "UPDATE action_cards SET \
                title = COALESCE($2, title), \
                image_url = COALESCE($3, image_url), \
                action_type = COALESCE($4, action_type), \
                action_value = COALESCE($5, action_value), \
                sort_order = COALESCE($6, sort_order), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionCard>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.action_type)
            .bind(&input.action_value)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM action_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
