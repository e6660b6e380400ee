//! Entreprise repository interface

use async_trait::async_trait;

use super::model::Entreprise;
use crate::shared::DomainResult;

#[async_trait]
pub trait EntrepriseRepository: Send + Sync {
    async fn create(&self, nom: &str) -> DomainResult<Entreprise>;
    async fn find_all(&self) -> DomainResult<Vec<Entreprise>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Entreprise>>;
    async fn exists_by_nom(&self, nom: &str) -> DomainResult<bool>;
    async fn update(&self, entreprise: Entreprise) -> DomainResult<Entreprise>;
    /// Deletes the company's intervenants and detaches its stands
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
