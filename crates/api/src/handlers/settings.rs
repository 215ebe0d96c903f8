//! Handlers for the `/settings` key/value resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::validation::require_non_blank;
use portal_db::models::setting::UpsertSetting;
use portal_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::path::Path;
use crate::state::AppState;

/// GET /api/v1/settings/{key}
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let setting = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Setting",
            key,
        }))?;
    Ok(Json(setting))
}

/// GET /api/v1/settings
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let settings = SettingRepo::list(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/v1/settings/{key}
///
/// Creates the setting if it does not exist yet.
pub async fn upsert(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(key): Path<String>,
    Json(input): Json<UpsertSetting>,
) -> AppResult<impl IntoResponse> {
    let key = require_non_blank("key", &key)?;

    let setting = SettingRepo::upsert(&state.pool, &key, &input.value).await?;
    tracing::info!(key = %setting.key, admin_id = admin.admin_id, "Setting saved");
    Ok(Json(setting))
}
