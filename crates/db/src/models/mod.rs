//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin;
pub mod appointment;
pub mod card;
pub mod carousel;
pub mod complaint;
pub mod dashboard;
pub mod game;
pub mod nav_link;
pub mod setting;
