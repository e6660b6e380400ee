//! Utilisateur repository interface

use async_trait::async_trait;

use super::model::{NewUtilisateur, Utilisateur};
use crate::shared::DomainResult;

#[async_trait]
pub trait UtilisateurRepository: Send + Sync {
    async fn create(&self, utilisateur: NewUtilisateur) -> DomainResult<Utilisateur>;
    async fn find_all(&self) -> DomainResult<Vec<Utilisateur>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Utilisateur>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Utilisateur>>;
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;
    async fn count(&self) -> DomainResult<u64>;
    /// Overwrite every field of the stored row with id `utilisateur.id`
    async fn update(&self, utilisateur: Utilisateur) -> DomainResult<Utilisateur>;
    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
