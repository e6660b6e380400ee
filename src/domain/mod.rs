//! Domain layer
//!
//! One module per aggregate, each holding the entity model and its
//! repository interface. `RepositoryProvider` exposes them all.

pub mod conference;
pub mod contrat;
pub mod entreprise;
pub mod evenement;
pub mod intervenant;
pub mod partenaire;
pub mod repositories;
pub mod salle;
pub mod stand;
pub mod tache;
pub mod utilisateur;

pub use repositories::RepositoryProvider;

pub use crate::shared::errors::{DomainError, DomainResult};
