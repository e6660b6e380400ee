//! Utilisateur DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::utilisateur::{NewUtilisateur, Role, Utilisateur};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUtilisateurRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 100, message = "Le nom ne doit pas dépasser 100 caractères")
    )]
    pub nom: String,
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 100, message = "Le prénom ne doit pas dépasser 100 caractères")
    )]
    pub prenom: String,
    #[validate(email(message = "L'email doit être valide"))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Le mot de passe doit contenir entre 6 et 128 caractères"
    ))]
    pub mot_de_passe: String,
    #[serde(default)]
    pub role: Role,
}

impl From<CreateUtilisateurRequest> for NewUtilisateur {
    /// `mot_de_passe` is still plain; the auth service hashes it
    fn from(r: CreateUtilisateurRequest) -> Self {
        Self {
            nom: r.nom,
            prenom: r.prenom,
            email: r.email,
            mot_de_passe: r.mot_de_passe,
            role: r.role,
        }
    }
}

/// The password is replaced only when `motDePasse` is present
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUtilisateurRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 100, message = "Le nom ne doit pas dépasser 100 caractères")
    )]
    pub nom: String,
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 100, message = "Le prénom ne doit pas dépasser 100 caractères")
    )]
    pub prenom: String,
    #[validate(email(message = "L'email doit être valide"))]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Le mot de passe doit contenir entre 6 et 128 caractères"
    ))]
    pub mot_de_passe: Option<String>,
}

/// Never carries the password hash
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtilisateurResponse {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: Role,
}

impl From<Utilisateur> for UtilisateurResponse {
    fn from(u: Utilisateur) -> Self {
        Self {
            id: u.id,
            nom: u.nom,
            prenom: u.prenom,
            email: u.email,
            role: u.role,
        }
    }
}
