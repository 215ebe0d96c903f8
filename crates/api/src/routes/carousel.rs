//! Route definitions for the `/carousel` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

/// Routes mounted at `/carousel`.
///
/// ```text
/// GET    /        -> list_active
/// POST   /        -> create
/// GET    /all     -> list_all
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::list_active).post(carousel::create))
        .route("/all", get(carousel::list_all))
        .route("/{id}", put(carousel::update).delete(carousel::delete))
}
