//! Salle repository interface

use async_trait::async_trait;

use super::model::Salle;
use crate::shared::DomainResult;

#[async_trait]
pub trait SalleRepository: Send + Sync {
    async fn create(&self, numero: i32, capacite: i32) -> DomainResult<Salle>;
    async fn find_all(&self) -> DomainResult<Vec<Salle>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Salle>>;
    async fn exists_by_numero(&self, numero: i32) -> DomainResult<bool>;
    async fn count(&self) -> DomainResult<u64>;
    async fn update(&self, salle: Salle) -> DomainResult<Salle>;
    /// Detaches the room's conferences
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
