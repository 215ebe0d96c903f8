use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `nav_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NavLink {
    pub id: DbId,
    pub label: String,
    pub action_type: String,
    pub action_value: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNavLink {
    pub label: String,
    pub action_type: String,
    #[serde(default)]
    pub action_value: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNavLink {
    pub label: Option<String>,
    pub action_type: Option<String>,
    pub action_value: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
