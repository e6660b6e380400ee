//! Contrat aggregate

pub mod model;
pub mod repository;

pub use model::{Contrat, TypeContrat};
pub use repository::ContratRepository;
