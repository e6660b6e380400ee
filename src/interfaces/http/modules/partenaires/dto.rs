//! Partenaire DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::partenaire::{NewPartenaire, Partenaire};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartenaireRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 200, message = "Le nom ne doit pas dépasser 200 caractères")
    )]
    pub nom: String,
    pub contrat_id: Option<String>,
    pub evenement_id: Option<i32>,
}

impl PartenaireRequest {
    pub fn into_partenaire(self, id: i32) -> Partenaire {
        Partenaire {
            id,
            nom: self.nom,
            contrat_id: self.contrat_id,
            evenement_id: self.evenement_id,
        }
    }
}

impl From<PartenaireRequest> for NewPartenaire {
    fn from(r: PartenaireRequest) -> Self {
        Self {
            nom: r.nom,
            contrat_id: r.contrat_id,
            evenement_id: r.evenement_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartenaireResponse {
    pub id: i32,
    pub nom: String,
    pub contrat_id: Option<String>,
    pub evenement_id: Option<i32>,
}

impl From<Partenaire> for PartenaireResponse {
    fn from(p: Partenaire) -> Self {
        Self {
            id: p.id,
            nom: p.nom,
            contrat_id: p.contrat_id,
            evenement_id: p.evenement_id,
        }
    }
}
