//! Authentication service: application-layer orchestration
//!
//! HTTP handlers stay thin and delegate password and token work here.

use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::domain::utilisateur::{NewUtilisateur, Utilisateur};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

/// Message returned for every failed login
pub const LOGIN_FAILED: &str = "Email ou mot de passe incorrect";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Verified against when the email is unknown so both failure paths cost one bcrypt check
const DUMMY_PASSWORD: &str = "forum-emi-dummy-password";

/// Returned after a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub utilisateur: Utilisateur,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
    dummy_hash: OnceLock<String>,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            repos,
            jwt_config,
            bcrypt_cost,
            dummy_hash: OnceLock::new(),
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and issue a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let Some(utilisateur) = self.repos.utilisateurs().find_by_email(email).await? else {
            let dummy = self.dummy_hash.get_or_init(|| {
                hash_password(DUMMY_PASSWORD, self.bcrypt_cost).unwrap_or_default()
            });
            let _ = verify_password(password, dummy);
            warn!(email, "Login failed: unknown email");
            return Err(DomainError::Unauthorized(LOGIN_FAILED.into()));
        };

        let valid = verify_password(password, &utilisateur.mot_de_passe).unwrap_or(false);
        if !valid {
            warn!(email, "Login failed: wrong password");
            return Err(DomainError::Unauthorized(LOGIN_FAILED.into()));
        }

        let token = create_token(
            utilisateur.id,
            &utilisateur.email,
            utilisateur.role.as_str(),
            &self.jwt_config,
        )
        .map_err(|e| DomainError::Storage(format!("Failed to create token: {}", e)))?;

        info!(user_id = utilisateur.id, role = %utilisateur.role, "User logged in");
        Ok(LoginResult { token, utilisateur })
    }

    /// Profile of the authenticated user
    pub async fn current_user(&self, user_id: i32) -> DomainResult<Utilisateur> {
        self.repos
            .utilisateurs()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Utilisateur", user_id))
    }

    /// Change a user's password. Verifies the current password first.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        check_length(new_password)?;

        let utilisateur = self.current_user(user_id).await?;

        let valid = verify_password(current_password, &utilisateur.mot_de_passe).unwrap_or(false);
        if !valid {
            return Err(DomainError::Validation(
                "motDePasseActuel: mot de passe actuel incorrect".into(),
            ));
        }

        let new_hash = self.hash(new_password)?;
        self.repos
            .utilisateurs()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    // ── Account management ──────────────────────────────────────

    /// Create an account, rejecting a taken email.
    pub async fn create_user(&self, mut new: NewUtilisateur) -> DomainResult<Utilisateur> {
        if self.repos.utilisateurs().exists_by_email(&new.email).await? {
            return Err(DomainError::AlreadyExists {
                entity: "Utilisateur",
                field: "email",
                value: new.email,
            });
        }

        check_length(&new.mot_de_passe)?;
        new.mot_de_passe = self.hash(&new.mot_de_passe)?;
        self.repos.utilisateurs().create(new).await
    }

    /// Store `utilisateur`, re-hashing when a new plain password is given.
    pub async fn update_user(
        &self,
        mut utilisateur: Utilisateur,
        new_password: Option<&str>,
    ) -> DomainResult<Utilisateur> {
        if let Some(plain) = new_password {
            check_length(plain)?;
            utilisateur.mot_de_passe = self.hash(plain)?;
        }
        self.repos.utilisateurs().update(utilisateur).await
    }

    pub fn hash(&self, plain: &str) -> DomainResult<String> {
        hash_password(plain, self.bcrypt_cost)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))
    }
}

fn check_length(password: &str) -> DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "motDePasse: doit contenir au moins {} caractères",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utilisateur::Role;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::database::repositories::test_support::test_db;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn service() -> AuthService {
        let repos = Arc::new(SeaOrmRepositoryProvider::new(test_db().await));
        AuthService::new(repos, JwtConfig::default(), 4)
    }

    fn sara() -> NewUtilisateur {
        NewUtilisateur {
            nom: "Alami".into(),
            prenom: "Sara".into(),
            email: "sara.alami@emi.ac.ma".into(),
            mot_de_passe: "sara123".into(),
            role: Role::Equipier,
        }
    }

    #[tokio::test]
    async fn login_issues_a_token_for_valid_credentials() {
        let svc = service().await;
        let created = svc.create_user(sara()).await.unwrap();
        assert_ne!(created.mot_de_passe, "sara123");

        let result = svc.login("sara.alami@emi.ac.ma", "sara123").await.unwrap();
        let claims = verify_token(&result.token, svc.jwt_config()).unwrap();
        assert_eq!(claims.user_id(), Some(created.id));
        assert_eq!(claims.role, "EQUIPIER");
        assert_eq!(result.utilisateur.prenom, "Sara");
    }

    #[tokio::test]
    async fn login_failures_look_identical() {
        let svc = service().await;
        svc.create_user(sara()).await.unwrap();

        let wrong_password = svc.login("sara.alami@emi.ac.ma", "nope").await.unwrap_err();
        let unknown_email = svc.login("ghost@emi.ac.ma", "sara123").await.unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, DomainError::Unauthorized(m) if m == LOGIN_FAILED));
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let svc = service().await;
        let u = svc.create_user(sara()).await.unwrap();

        assert!(matches!(
            svc.change_password(u.id, "wrong", "nouveau1").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.change_password(u.id, "sara123", "abc").await,
            Err(DomainError::Validation(_))
        ));

        svc.change_password(u.id, "sara123", "nouveau1").await.unwrap();
        assert!(svc.login("sara.alami@emi.ac.ma", "sara123").await.is_err());
        assert!(svc.login("sara.alami@emi.ac.ma", "nouveau1").await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_before_insert() {
        let svc = service().await;
        svc.create_user(sara()).await.unwrap();
        assert!(matches!(
            svc.create_user(sara()).await,
            Err(DomainError::AlreadyExists { field: "email", .. })
        ));
    }
}
