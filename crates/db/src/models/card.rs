//! Action card model and DTOs.
//!
//! Cards are the portrait tiles under the carousel; clicking one runs the
//! configured action (see `portal_core::action`).

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `action_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionCard {
    pub id: DbId,
    pub title: String,
    pub image_url: Option<String>,
    pub action_type: String,
    pub action_value: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActionCard {
    pub title: String,
    pub image_url: Option<String>,
    pub action_type: String,
    #[serde(default)]
    pub action_value: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActionCard {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub action_type: Option<String>,
    pub action_value: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
