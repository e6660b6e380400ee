//! Conference aggregate

pub mod model;
pub mod repository;

pub use model::{Conference, NewConference};
pub use repository::ConferenceRepository;
