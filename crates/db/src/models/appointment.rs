use portal_core::types::{CalendarDay, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `appointments` table. Written once, never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub game_id: DbId,
    pub origin: String,
    pub appointed_on: CalendarDay,
    pub created_at: Timestamp,
}
