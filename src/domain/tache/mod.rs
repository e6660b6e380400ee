//! Tache aggregate

pub mod model;
pub mod repository;

pub use model::{NewTache, PrioriteTache, StatutTache, Tache};
pub use repository::TacheRepository;
