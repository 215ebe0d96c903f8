//! Hero carousel slide model and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `carousel_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarouselSlide {
    pub id: DbId,
    pub title: String,
    pub badge: Option<String>,
    pub description: Option<String>,
    pub refund_policy: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarouselSlide {
    pub title: String,
    pub badge: Option<String>,
    pub description: Option<String>,
    pub refund_policy: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a slide. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarouselSlide {
    pub title: Option<String>,
    pub badge: Option<String>,
    pub description: Option<String>,
    pub refund_policy: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
