//! Evenement aggregate

pub mod model;
pub mod repository;

pub use model::{Evenement, NewEvenement};
pub use repository::EvenementRepository;
