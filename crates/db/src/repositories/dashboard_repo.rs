//! Aggregate counts for the admin dashboard.

use portal_core::complaint::STATUS_PENDING;
use portal_core::types::CalendarDay;
use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all dashboard counters in a single round trip.
    pub async fn stats(pool: &PgPool, today: CalendarDay) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
                (SELECT COUNT(*) FROM appointments) AS total_appointments, \
                (SELECT COUNT(*) FROM appointments WHERE appointed_on = $1) AS appointments_today, \
                (SELECT COUNT(*) FROM game_versions WHERE is_active = true) AS active_games, \
                (SELECT COUNT(*) FROM complaints WHERE status = $2) AS pending_complaints",
        )
        .bind(today)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }
}
