//! Conference repository interface

use async_trait::async_trait;

use super::model::{Conference, NewConference};
use crate::shared::DomainResult;

#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    async fn create(&self, conference: NewConference) -> DomainResult<Conference>;
    async fn find_all(&self) -> DomainResult<Vec<Conference>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Conference>>;
    /// Replaces the scalar fields and the speaker set
    async fn update(&self, conference: Conference) -> DomainResult<Conference>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
