//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::LoginResult;
use crate::domain::utilisateur::Role;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        email(message = "L'email doit être valide")
    )]
    pub email: String,
    #[validate(custom(function = "crate::shared::not_blank"))]
    pub mot_de_passe: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: Role,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        let u = result.utilisateur;
        Self {
            token: result.token,
            nom: u.nom,
            prenom: u.prenom,
            email: u.email,
            role: u.role,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(custom(function = "crate::shared::not_blank"))]
    pub mot_de_passe_actuel: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Le mot de passe doit contenir entre 6 et 128 caractères"
    ))]
    pub nouveau_mot_de_passe: String,
}
