//! # Forum EMI backend
//!
//! Administrative REST API of the Forum EMI: exhibiting companies, booths,
//! speakers, rooms, conferences, events, partners with their sponsorship
//! contracts, and the logistics team's tasks.
//!
//! ## Architecture
//!
//! - **shared**: error taxonomy, validators, shutdown signal
//! - **domain**: aggregates, permissions and repository traits
//! - **application**: authentication service and startup seeding
//! - **infrastructure**: SeaORM persistence, migrations, crypto
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: process lifecycle shared by the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::init_database;
pub use interfaces::http::create_api_router;
