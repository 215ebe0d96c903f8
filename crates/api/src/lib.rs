//! Promo portal API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes)
//! so integration tests and the binary entrypoint can both access them.
//!
//! # Tests
//!
//! Integration tests that only exercise rejections (auth, validation, path
//! parsing) run against a pool that never connects. Flows that hit the
//! database, including the same-day `409 ALREADY_APPOINTED` check, are
//! `#[ignore]`d and need `DATABASE_URL` plus `cargo test -- --include-ignored`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
