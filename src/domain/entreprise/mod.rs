//! Entreprise aggregate

pub mod model;
pub mod repository;

pub use model::Entreprise;
pub use repository::EntrepriseRepository;
