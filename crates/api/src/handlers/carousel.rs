//! Handlers for the `/carousel` resource (hero banner slides).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::validation::{optional_non_blank, require_non_blank};
use portal_db::models::carousel::{CreateCarouselSlide, UpdateCarouselSlide};
use portal_db::repositories::CarouselRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::path::Path;
use crate::state::AppState;

/// GET /api/v1/carousel
///
/// Active slides for the public home page.
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slides = CarouselRepo::list(&state.pool, false).await?;
    Ok(Json(slides))
}

/// GET /api/v1/carousel/all
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let slides = CarouselRepo::list(&state.pool, true).await?;
    Ok(Json(slides))
}

/// POST /api/v1/carousel
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(mut input): Json<CreateCarouselSlide>,
) -> AppResult<impl IntoResponse> {
    input.title = require_non_blank("title", &input.title)?;

    let slide = CarouselRepo::create(&state.pool, &input).await?;
    tracing::info!(slide_id = slide.id, admin_id = admin.admin_id, "Carousel slide created");
    Ok((StatusCode::CREATED, Json(slide)))
}

/// PUT /api/v1/carousel/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateCarouselSlide>,
) -> AppResult<impl IntoResponse> {
    input.title = optional_non_blank("title", input.title.as_deref())?;

    let slide = CarouselRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Carousel slide",
            id,
        }))?;
    tracing::info!(slide_id = id, admin_id = admin.admin_id, "Carousel slide updated");
    Ok(Json(slide))
}

/// DELETE /api/v1/carousel/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CarouselRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Carousel slide",
            id,
        }));
    }
    tracing::info!(slide_id = id, admin_id = admin.admin_id, "Carousel slide deleted");
    Ok(StatusCode::NO_CONTENT)
}
