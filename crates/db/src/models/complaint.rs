//! Visitor complaint model and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `complaints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    pub content: String,
    pub contact_info: Option<String>,
    pub origin: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO. Built by the handler after validation; status is always `pending`.
#[derive(Debug, Clone)]
pub struct CreateComplaint {
    pub content: String,
    pub contact_info: Option<String>,
    pub origin: String,
}

/// Body of `PUT /complaints/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComplaintStatus {
    pub status: String,
}
