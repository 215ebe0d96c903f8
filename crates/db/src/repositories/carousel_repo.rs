//! Repository for the `carousel_slides` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::carousel::{CarouselSlide, CreateCarouselSlide, UpdateCarouselSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, badge, description, refund_policy, image_url, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for carousel slides.
pub struct CarouselRepo;

impl CarouselRepo {
    /// Insert a new slide, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCarouselSlide,
    ) -> Result<CarouselSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO carousel_slides \
                (title, badge, description, refund_policy, image_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(&input.title)
            .bind(&input.badge)
            .bind(&input.description)
            .bind(&input.refund_policy)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List slides ordered by `sort_order`, then `id`.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<CarouselSlide>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM carousel_slides ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM carousel_slides WHERE is_active = true \
                 ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, CarouselSlide>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a slide. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarouselSlide,
    ) -> Result<Option<CarouselSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE carousel_slides SET \
                title = COALESCE($2, title), \
                badge = COALESCE($3, badge), \
                description = COALESCE($4, description), \
                refund_policy = COALESCE($5, refund_policy), \
                image_url = COALESCE($6, image_url), \
                sort_order = COALESCE($7, sort_order), \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselSlide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.badge)
            .bind(&input.description)
            .bind(&input.refund_policy)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a slide. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carousel_slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
