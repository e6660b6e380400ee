//! Partenaire repository interface

use async_trait::async_trait;

use super::model::{NewPartenaire, Partenaire};
use crate::shared::DomainResult;

#[async_trait]
pub trait PartenaireRepository: Send + Sync {
    async fn create(&self, partenaire: NewPartenaire) -> DomainResult<Partenaire>;
    async fn find_all(&self) -> DomainResult<Vec<Partenaire>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Partenaire>>;
    async fn update(&self, partenaire: Partenaire) -> DomainResult<Partenaire>;
    /// Deletes the partner together with its contract
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
