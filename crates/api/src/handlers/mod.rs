//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input through `portal_core`, delegate to the matching
//! repository in `portal_db` and map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod cards;
pub mod carousel;
pub mod complaints;
pub mod games;
pub mod nav_links;
pub mod settings;
