//! Route definitions for the `/complaints` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// POST   /        -> submit (public)
/// GET    /        -> list (?status=)
/// PUT    /{id}    -> update_status
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(complaints::submit).get(complaints::list))
        .route(
            "/{id}",
            put(complaints::update_status).delete(complaints::delete),
        )
}
