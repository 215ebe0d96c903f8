//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod appointment_repo;
pub mod card_repo;
pub mod carousel_repo;
pub mod complaint_repo;
pub mod dashboard_repo;
pub mod game_repo;
pub mod nav_link_repo;
pub mod setting_repo;

pub use admin_repo::AdminRepo;
pub use appointment_repo::{AppointmentRepo, PgAppointmentLedger};
pub use card_repo::CardRepo;
pub use carousel_repo::CarouselRepo;
pub use complaint_repo::ComplaintRepo;
pub use dashboard_repo::DashboardRepo;
pub use game_repo::GameRepo;
pub use nav_link_repo::NavLinkRepo;
pub use setting_repo::SettingRepo;
