//! Salle aggregate

pub mod model;
pub mod repository;

pub use model::Salle;
pub use repository::SalleRepository;
