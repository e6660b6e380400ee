//! Stand repository interface

use async_trait::async_trait;

use super::model::{NewStand, Stand};
use crate::shared::DomainResult;

#[async_trait]
pub trait StandRepository: Send + Sync {
    async fn create(&self, stand: NewStand) -> DomainResult<Stand>;
    async fn find_all(&self) -> DomainResult<Vec<Stand>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Stand>>;
    async fn find_by_zone(&self, zone: &str) -> DomainResult<Vec<Stand>>;
    async fn exists_by_numero(&self, numero: i32) -> DomainResult<bool>;
    async fn update(&self, stand: Stand) -> DomainResult<Stand>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
