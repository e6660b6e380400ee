//! Evenement repository interface

use async_trait::async_trait;

use super::model::{Evenement, NewEvenement};
use crate::shared::DomainResult;

#[async_trait]
pub trait EvenementRepository: Send + Sync {
    async fn create(&self, evenement: NewEvenement) -> DomainResult<Evenement>;
    async fn find_all(&self) -> DomainResult<Vec<Evenement>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Evenement>>;
    async fn update(&self, evenement: Evenement) -> DomainResult<Evenement>;
    /// Deletes the event's partenaires
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
