//! Handlers for the `/cards` resource (action cards).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::action::validate_action_type;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::validation::{optional_non_blank, require_non_blank};
use portal_db::models::card::{CreateActionCard, UpdateActionCard};
use portal_db::repositories::CardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::path::Path;
use crate::state::AppState;

/// GET /api/v1/cards
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cards = CardRepo::list(&state.pool, false).await?;
    Ok(Json(cards))
}

/// GET /api/v1/cards/all
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let cards = CardRepo::list(&state.pool, true).await?;
    Ok(Json(cards))
}

/// POST /api/v1/cards
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(mut input): Json<CreateActionCard>,
) -> AppResult<impl IntoResponse> {
    input.title = require_non_blank("title", &input.title)?;
    validate_action_type(&input.action_type)?;

    let card = CardRepo::create(&state.pool, &input).await?;
    tracing::info!(card_id = card.id, admin_id = admin.admin_id, "Action card created");
    Ok((StatusCode::CREATED, Json(card)))
}

/// PUT /api/v1/cards/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateActionCard>,
) -> AppResult<impl IntoResponse> {
    input.title = optional_non_blank("title", input.title.as_deref())?;
    if let Some(action_type) = &input.action_type {
        validate_action_type(action_type)?;
    }

    let card = CardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Action card",
            id,
        }))?;
    tracing::info!(card_id = id, admin_id = admin.admin_id, "Action card updated");
    Ok(Json(card))
}

/// DELETE /api/v1/cards/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CardRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Action card",
            id,
        }));
    }
    tracing::info!(card_id = id, admin_id = admin.admin_id, "Action card deleted");
    Ok(StatusCode::NO_CONTENT)
}
