//! Handlers for the `/nav-links` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::action::validate_action_type;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::validation::{optional_non_blank, require_non_blank};
use portal_db::models::nav_link::{CreateNavLink, UpdateNavLink};
use portal_db::repositories::NavLinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::path::Path;
use crate::state::AppState;

/// GET /api/v1/nav-links
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let links = NavLinkRepo::list(&state.pool, false).await?;
    Ok(Json(links))
}

/// GET /api/v1/nav-links/all
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let links = NavLinkRepo::list(&state.pool, true).await?;
    Ok(Json(links))
}

/// POST /api/v1/nav-links
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(mut input): Json<CreateNavLink>,
) -> AppResult<impl IntoResponse> {
    input.label = require_non_blank("label", &input.label)?;
    validate_action_type(&input.action_type)?;

    let link = NavLinkRepo::create(&state.pool, &input).await?;
    tracing::info!(nav_link_id = link.id, admin_id = admin.admin_id, "Nav link created");
    Ok((StatusCode::CREATED, Json(link)))
}

/// PUT /api/v1/nav-links/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateNavLink>,
) -> AppResult<impl IntoResponse> {
    input.label = optional_non_blank("label", input.label.as_deref())?;
    if let Some(action_type) = &input.action_type {
        validate_action_type(action_type)?;
    }

    let link = NavLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Nav link",
            id,
        }))?;
    tracing::info!(nav_link_id = id, admin_id = admin.admin_id, "Nav link updated");
    Ok(Json(link))
}

/// DELETE /api/v1/nav-links/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !NavLinkRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Nav link",
            id,
        }));
    }
    tracing::info!(nav_link_id = id, admin_id = admin.admin_id, "Nav link deleted");
    Ok(StatusCode::NO_CONTENT)
}
