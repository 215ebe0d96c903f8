//! Repository for the `game_versions` table.
//!
//! Admin writes never touch `appointment_count`; see
//! [`PgAppointmentLedger`](super::PgAppointmentLedger) for the only path that does.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGameVersion, GameVersion, UpdateGameVersion};

const COLUMNS: &str = "id, name, rhythm, type, engine, description, score, appointment_count, \
                       launcher_url, web_game_url, intro_url, sort_order, is_active, \
                       created_at, updated_at";

/// Provides CRUD operations for game versions.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game version with a zero appointment count.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGameVersion,
    ) -> Result<GameVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_versions \
                (name, rhythm, type, engine, description, score, appointment_count, \
                 launcher_url, web_game_url, intro_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), 0, $7, $8, $9, \
                     COALESCE($10, 0), COALESCE($11, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameVersion>(&query)
            .bind(&input.name)
            .bind(&input.rhythm)
            .bind(&input.game_type)
            .bind(&input.engine)
            .bind(&input.description)
            .bind(input.score)
            .bind(&input.launcher_url)
            .bind(&input.web_game_url)
            .bind(&input.intro_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_versions WHERE id = $1");
        sqlx::query_as::<_, GameVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List game versions ordered by `sort_order`, then `id`.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<GameVersion>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM game_versions ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM game_versions WHERE is_active = true \
                 ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, GameVersion>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a game version. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGameVersion,
    ) -> Result<Option<GameVersion>, sqlx::Error> {
        let query = format!(
            "UPDATE game_versions SET \
                name = COALESCE($2, name), \
                rhythm = COALESCE($3, rhythm), \
                type = COALESCE($4, type), \
                engine = COALESCE($5, engine), \
                description = COALESCE($6, description), \
                score = COALESCE($7, score), \
                launcher_url = COALESCE($8, launcher_url), \
                web_game_url = COALESCE($9, web_game_url), \
                intro_url = COALESCE($10, intro_url), \
                sort_order = COALESCE($11, sort_order), \
                is_active = COALESCE($12, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameVersion>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.rhythm)
            .bind(&input.game_type)
            .bind(&input.engine)
            .bind(&input.description)
            .bind(input.score)
            .bind(&input.launcher_url)
            .bind(&input.web_game_url)
            .bind(&input.intro_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a game version. Its appointments go with it (FK cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM game_versions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
