pub mod admin;
pub mod auth;
pub mod cards;
pub mod carousel;
pub mod complaints;
pub mod games;
pub mod health;
pub mod nav_links;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/init                       create first admin (public, once)
///
/// /carousel                        list active (public), create (admin)
/// /carousel/all                    list all (admin)
/// /carousel/{id}                   update, delete (admin)
///
/// /cards                           list active (public), create (admin)
/// /cards/all                       list all (admin)
/// /cards/{id}                      update, delete (admin)
///
/// /games                           list active (public), create (admin)
/// /games/all                       list all (admin)
/// /games/{id}                      update, delete (admin)
/// /games/{id}/appoint              appoint (public, once per origin per day)
///
/// /nav-links                       list active (public), create (admin)
/// /nav-links/all                   list all (admin)
/// /nav-links/{id}                  update, delete (admin)
///
/// /complaints                      submit (public), list (admin, ?status=)
/// /complaints/{id}                 update status, delete (admin)
///
/// /settings                        list (admin)
/// /settings/{key}                  get (public), upsert (admin)
///
/// /admin/dashboard-stats           dashboard counters (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/carousel", carousel::router())
        .nest("/cards", cards::router())
        .nest("/games", games::router())
        .nest("/nav-links", nav_links::router())
        .nest("/complaints", complaints::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}
