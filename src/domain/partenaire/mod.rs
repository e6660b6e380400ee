//! Partenaire aggregate

pub mod model;
pub mod repository;

pub use model::{NewPartenaire, Partenaire};
pub use repository::PartenaireRepository;
