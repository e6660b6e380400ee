//! Stand aggregate

pub mod model;
pub mod repository;

pub use model::{NewStand, Stand, StatutStand, TailleStand};
pub use repository::StandRepository;
