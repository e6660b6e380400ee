//! Contrat repository interface

use async_trait::async_trait;

use super::model::Contrat;
use crate::shared::DomainResult;

#[async_trait]
pub trait ContratRepository: Send + Sync {
    /// Fails with `Conflict` when the id is taken
    async fn create(&self, contrat: Contrat) -> DomainResult<Contrat>;
    async fn find_all(&self) -> DomainResult<Vec<Contrat>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Contrat>>;
    async fn update(&self, contrat: Contrat) -> DomainResult<Contrat>;
    /// Detaches the partner that referenced the contract
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
