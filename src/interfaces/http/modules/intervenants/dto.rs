//! Intervenant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::intervenant::{Intervenant, NewIntervenant};

/// Body of create and update; every field is editable
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntervenantRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 100, message = "Le nom ne doit pas dépasser 100 caractères")
    )]
    pub nom: String,
    pub biographie: Option<String>,
    #[validate(length(max = 100, message = "La spécialité ne doit pas dépasser 100 caractères"))]
    pub specialite: Option<String>,
    #[validate(length(max = 100, message = "L'email ne doit pas dépasser 100 caractères"))]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "Le téléphone ne doit pas dépasser 20 caractères"))]
    pub telephone: Option<String>,
    pub entreprise_id: Option<i32>,
}

impl IntervenantRequest {
    pub fn into_intervenant(self, id: i32) -> Intervenant {
        Intervenant {
            id,
            nom: self.nom,
            biographie: self.biographie,
            specialite: self.specialite,
            email: self.email,
            telephone: self.telephone,
            entreprise_id: self.entreprise_id,
        }
    }
}

impl From<IntervenantRequest> for NewIntervenant {
    fn from(r: IntervenantRequest) -> Self {
        Self {
            nom: r.nom,
            biographie: r.biographie,
            specialite: r.specialite,
            email: r.email,
            telephone: r.telephone,
            entreprise_id: r.entreprise_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntervenantResponse {
    pub id: i32,
    pub nom: String,
    pub biographie: Option<String>,
    pub specialite: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub entreprise_id: Option<i32>,
}

impl From<Intervenant> for IntervenantResponse {
    fn from(i: Intervenant) -> Self {
        Self {
            id: i.id,
            nom: i.nom,
            biographie: i.biographie,
            specialite: i.specialite,
            email: i.email,
            telephone: i.telephone,
            entreprise_id: i.entreprise_id,
        }
    }
}
