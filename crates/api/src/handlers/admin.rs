//! Handlers for the `/admin` dashboard.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use portal_core::appointment::appointment_day;
use portal_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard-stats
///
/// "Today" uses the same UTC day boundary as the appointment guard.
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let stats = DashboardRepo::stats(&state.pool, appointment_day(Utc::now())).await?;
    Ok(Json(stats))
}
