//! Path extractor whose rejection uses the API's JSON error body.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// Drop-in for [`axum::extract::Path`]. A segment that fails to parse
/// (`/games/abc/appoint`) becomes `400 {error, code: "INVALID_PATH"}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
