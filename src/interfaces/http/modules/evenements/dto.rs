//! Evenement DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::evenement::{Evenement, NewEvenement};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvenementRequest {
    #[validate(custom(function = "crate::shared::not_blank"))]
    pub nom: String,
    /// ISO date, e.g. "2025-03-12"
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub lieu: Option<String>,
}

impl EvenementRequest {
    pub fn into_evenement(self, id: i32) -> Evenement {
        Evenement {
            id,
            nom: self.nom,
            date_debut: self.date_debut,
            date_fin: self.date_fin,
            lieu: self.lieu,
        }
    }
}

impl From<EvenementRequest> for NewEvenement {
    fn from(r: EvenementRequest) -> Self {
        Self {
            nom: r.nom,
            date_debut: r.date_debut,
            date_fin: r.date_fin,
            lieu: r.lieu,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvenementResponse {
    pub id: i32,
    pub nom: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub lieu: Option<String>,
}

impl From<Evenement> for EvenementResponse {
    fn from(e: Evenement) -> Self {
        Self {
            id: e.id,
            nom: e.nom,
            date_debut: e.date_debut,
            date_fin: e.date_fin,
            lieu: e.lieu,
        }
    }
}
