//! Intervenant repository interface

use async_trait::async_trait;

use super::model::{Intervenant, NewIntervenant};
use crate::shared::DomainResult;

#[async_trait]
pub trait IntervenantRepository: Send + Sync {
    async fn create(&self, intervenant: NewIntervenant) -> DomainResult<Intervenant>;
    async fn find_all(&self) -> DomainResult<Vec<Intervenant>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Intervenant>>;
    async fn update(&self, intervenant: Intervenant) -> DomainResult<Intervenant>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
