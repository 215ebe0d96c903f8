//! Route definitions for the `/cards` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Routes mounted at `/cards`.
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
        .route("/", get(cards::list_active).post(cards::create))
        .route("/all", get(cards::list_all))
        .route("/{id}", put(cards::update).delete(cards::delete))
}
