//! Contrats module: sponsorship contracts

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
