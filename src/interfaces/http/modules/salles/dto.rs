//! Salle DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::salle::Salle;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalleRequest {
    pub numero: i32,
    #[validate(range(min = 1, message = "La capacité doit être d'au moins 1 personne"))]
    pub capacite: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalleResponse {
    pub id: i32,
    pub numero: i32,
    pub capacite: i32,
}

impl From<Salle> for SalleResponse {
    fn from(s: Salle) -> Self {
        Self {
            id: s.id,
            numero: s.numero,
            capacite: s.capacite,
        }
    }
}
