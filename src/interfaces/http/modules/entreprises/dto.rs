//! Entreprise DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entreprise::Entreprise;

/// Body of create and update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepriseRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 200, message = "Le nom ne doit pas dépasser 200 caractères")
    )]
    pub nom: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrepriseResponse {
    pub id: i32,
    pub nom: String,
}

impl From<Entreprise> for EntrepriseResponse {
    fn from(e: Entreprise) -> Self {
        Self { id: e.id, nom: e.nom }
    }
}
