use serde::Serialize;
use sqlx::FromRow;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_appointments: i64,
    pub appointments_today: i64,
    pub active_games: i64,
    pub pending_complaints: i64,
}
