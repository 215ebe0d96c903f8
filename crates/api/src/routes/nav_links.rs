//! Route definitions for the `/nav-links` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::nav_links;
use crate::state::AppState;

/// Routes mounted at `/nav-links`.
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
        .route("/", get(nav_links::list_active).post(nav_links::create))
        .route("/all", get(nav_links::list_all))
        .route("/{id}", put(nav_links::update).delete(nav_links::delete))
}
