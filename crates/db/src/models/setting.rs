use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_settings` table. `value` is free-form JSON.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}

/// Body of `PUT /settings/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSetting {
    pub value: serde_json::Value,
}
