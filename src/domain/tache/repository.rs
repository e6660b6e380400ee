//! Tache repository interface

use async_trait::async_trait;

use super::model::{NewTache, Tache};
use crate::shared::DomainResult;

#[async_trait]
pub trait TacheRepository: Send + Sync {
    async fn create(&self, tache: NewTache) -> DomainResult<Tache>;
    async fn find_all(&self) -> DomainResult<Vec<Tache>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tache>>;
    async fn update(&self, tache: Tache) -> DomainResult<Tache>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
