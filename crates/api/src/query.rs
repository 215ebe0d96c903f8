//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?status=` filter for the complaint list.
#[derive(Debug, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}
