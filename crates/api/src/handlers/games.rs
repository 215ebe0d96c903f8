//! Handlers for the `/games` resource (game versions) and appointments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use portal_core::appointment::{self, AppointmentError};
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::validation::{optional_non_blank, require_non_blank};
use portal_db::models::game::{CreateGameVersion, UpdateGameVersion};
use portal_db::repositories::{GameRepo, PgAppointmentLedger};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::origin::ClientOrigin;
use crate::middleware::path::Path;
use crate::state::AppState;

/// Response body for a successful appointment.
#[derive(Debug, Serialize)]
pub struct AppointResponse {
    pub success: bool,
    pub appointment_count: i64,
}

/// Scores are shown as ratings; they must be finite and non-negative.
fn validate_score(score: Option<f64>) -> Result<(), CoreError> {
    match score {
        Some(s) if !s.is_finite() || s < 0.0 => Err(CoreError::Validation(
            "score must be a non-negative number".into(),
        )),
        _ => Ok(()),
    }
}

/// GET /api/v1/games
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = GameRepo::list(&state.pool, false).await?;
    Ok(Json(games))
}

/// GET /api/v1/games/all
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let games = GameRepo::list(&state.pool, true).await?;
    Ok(Json(games))
}

/// POST /api/v1/games
///
/// New game versions always start with zero appointments.
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(mut input): Json<CreateGameVersion>,
) -> AppResult<impl IntoResponse> {
    input.name = require_non_blank("name", &input.name)?;
    validate_score(input.score)?;

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, admin_id = admin.admin_id, "Game version created");
    Ok((StatusCode::CREATED, Json(game)))
}

/// PUT /api/v1/games/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateGameVersion>,
) -> AppResult<impl IntoResponse> {
    input.name = optional_non_blank("name", input.name.as_deref())?;
    validate_score(input.score)?;

    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game version",
            id,
        }))?;
    tracing::info!(game_id = id, admin_id = admin.admin_id, "Game version updated");
    Ok(Json(game))
}

/// DELETE /api/v1/games/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GameRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Game version",
            id,
        }));
    }
    tracing::info!(game_id = id, admin_id = admin.admin_id, "Game version deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/games/{id}/appoint
///
/// Anonymous; at most once per origin per UTC day.
pub async fn appoint(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ClientOrigin(origin): ClientOrigin,
) -> AppResult<Json<AppointResponse>> {
    let ledger = PgAppointmentLedger::new(state.pool.clone());

    match appointment::appoint(&ledger, id, &origin, Utc::now()).await {
        Ok(appointment_count) => {
            tracing::info!(game_id = id, %origin, appointment_count, "Appointment accepted");
            Ok(Json(AppointResponse {
                success: true,
                appointment_count,
            }))
        }
        Err(AppointmentError::AlreadyAppointed) => {
            tracing::info!(game_id = id, %origin, "Duplicate appointment rejected");
            Err(AppointmentError::AlreadyAppointed.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds() {
        assert!(validate_score(None).is_ok());
        assert!(validate_score(Some(9.5)).is_ok());
        assert!(validate_score(Some(-0.1)).is_err());
        assert!(validate_score(Some(f64::NAN)).is_err());
    }
}
