//! Route definitions for the `/games` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /               -> list_active
/// POST   /               -> create
/// GET    /all            -> list_all
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/appoint   -> appoint
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_active).post(games::create))
        .route("/all", get(games::list_all))
        .route("/{id}", put(games::update).delete(games::delete))
        .route("/{id}/appoint", post(games::appoint))
}
