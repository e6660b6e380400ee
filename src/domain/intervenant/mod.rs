//! Intervenant aggregate

pub mod model;
pub mod repository;

pub use model::{Intervenant, NewIntervenant};
pub use repository::IntervenantRepository;
