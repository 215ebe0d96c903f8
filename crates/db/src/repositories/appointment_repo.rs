//! Repository for the `appointments` table and the PostgreSQL
//! [`AppointmentLedger`] adapter.

use async_trait::async_trait;
use portal_core::appointment::{AppointmentLedger, LedgerOutcome};
use portal_core::types::{CalendarDay, DbId};
use sqlx::PgPool;

use crate::models::appointment::Appointment;

const COLUMNS: &str = "id, game_id, origin, appointed_on, created_at";

/// Read-side queries over appointment records.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// All records for a game, oldest first.
    pub async fn list_for_game(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments WHERE game_id = $1 ORDER BY appointed_on, id"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_for_game(pool: &PgPool, game_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments WHERE game_id = $1")
            .bind(game_id)
            .fetch_one(pool)
            .await
    }
}

/// Transactional ledger backed by PostgreSQL.
///
/// Inside one transaction: lock the game row, insert the record with
/// `ON CONFLICT DO NOTHING` against `uq_appointments_game_origin_day`, then
/// bump the counter in a single `UPDATE`. A duplicate or a missing game rolls
/// the transaction back untouched.
#[derive(Clone)]
pub struct PgAppointmentLedger {
    pool: PgPool,
}

impl PgAppointmentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentLedger for PgAppointmentLedger {
    type Error = sqlx::Error;

    async fn record(
        &self,
        game_id: DbId,
        origin: &str,
        day: CalendarDay,
    ) -> Result<LedgerOutcome, Self::Error> {
        let mut tx = self.pool.begin().await?;

        let game = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM game_versions WHERE id = $1 FOR UPDATE",
        )
        .bind(game_id)
        .fetch_optional(&mut *tx)
        .await?;

        if game.is_none() {
            tx.rollback().await?;
            return Ok(LedgerOutcome::GameNotFound);
        }

        let inserted = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO appointments (game_id, origin, appointed_on) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_appointments_game_origin_day DO NOTHING \
             RETURNING id",
        )
        .bind(game_id)
        .bind(origin)
        .bind(day)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            tx.rollback().await?;
            return Ok(LedgerOutcome::AlreadyAppointed);
        }

        let appointment_count = sqlx::query_scalar::<_, i64>(
            "UPDATE game_versions SET appointment_count = appointment_count + 1 \
             WHERE id = $1 \
             RETURNING appointment_count",
        )
        .bind(game_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(game_id, origin, %day, appointment_count, "Appointment recorded");
        Ok(LedgerOutcome::Recorded { appointment_count })
    }
}
