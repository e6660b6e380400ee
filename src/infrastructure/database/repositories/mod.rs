//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod conference_repository;
pub mod contrat_repository;
pub mod entreprise_repository;
pub mod evenement_repository;
pub mod intervenant_repository;
pub mod partenaire_repository;
pub mod repository_provider;
pub mod salle_repository;
pub mod stand_repository;
pub mod tache_repository;
pub mod utilisateur_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::shared::DomainError;

/// Map a SeaORM error onto the domain taxonomy.
///
/// Unique violations become `Conflict`, broken references `Validation`.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::Conflict(format!("Unique constraint violated: {}", msg))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            DomainError::Validation(format!("Referenced record does not exist: {}", msg))
        }
        _ => DomainError::Storage(format!("Database error: {}", e)),
    }
}
