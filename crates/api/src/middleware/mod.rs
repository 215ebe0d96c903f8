//! Request extractors.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated administrator from a Bearer token.
//! - [`origin::ClientOrigin`] -- Derives the caller's origin identifier.
//! - [`path::Path`] -- Path parameters with JSON rejections.

pub mod auth;
pub mod origin;
pub mod path;
