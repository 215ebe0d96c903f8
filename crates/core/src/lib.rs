//! Domain types and rules for the promo portal backend.
//!
//! Nothing in this crate touches the database or HTTP; storage is reached
//! through ports such as [`appointment::AppointmentLedger`].

pub mod action;
pub mod appointment;
pub mod complaint;
pub mod error;
pub mod origin;
pub mod types;
pub mod validation;
