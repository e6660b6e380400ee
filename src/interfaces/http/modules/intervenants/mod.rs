//! Intervenants module: conference speakers

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
