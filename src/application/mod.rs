//! Application layer: use-cases that orchestrate repositories and crypto

pub mod identity;
pub mod seeding;

pub use identity::{AuthService, LoginResult};
pub use seeding::{DataSeeder, SeedReport};
