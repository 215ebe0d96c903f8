//! Route definitions for the `/settings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /         -> list
/// GET /{key}    -> get
/// PUT /{key}    -> upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::list))
        .route("/{key}", get(settings::get).put(settings::upsert))
}
