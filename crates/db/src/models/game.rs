//! Game version model and DTOs.
//!
//! `appointment_count` is deliberately absent from both DTOs: only the
//! appointment ledger may change it.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `game_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameVersion {
    pub id: DbId,
    pub name: String,
    pub rhythm: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub engine: Option<String>,
    pub description: Option<String>,
    pub score: f64,
    pub appointment_count: i64,
    pub launcher_url: Option<String>,
    pub web_game_url: Option<String>,
    pub intro_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a game version. The counter always starts at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameVersion {
    pub name: String,
    pub rhythm: Option<String>,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub engine: Option<String>,
    pub description: Option<String>,
    pub score: Option<f64>,
    pub launcher_url: Option<String>,
    pub web_game_url: Option<String>,
    pub intro_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGameVersion {
    pub name: Option<String>,
    pub rhythm: Option<String>,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub engine: Option<String>,
    pub description: Option<String>,
    pub score: Option<f64>,
    pub launcher_url: Option<String>,
    pub web_game_url: Option<String>,
    pub intro_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
