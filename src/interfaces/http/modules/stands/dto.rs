//! Stand DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::stand::{NewStand, Stand, StatutStand, TailleStand};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStandRequest {
    pub numero: i32,
    #[serde(default)]
    pub statut: StatutStand,
    #[serde(default)]
    pub taille: TailleStand,
    #[validate(length(max = 50, message = "La zone ne doit pas dépasser 50 caractères"))]
    pub zone: Option<String>,
    pub entreprise_id: Option<i32>,
}

impl From<CreateStandRequest> for NewStand {
    fn from(r: CreateStandRequest) -> Self {
        Self {
            numero: r.numero,
            statut: r.statut,
            taille: r.taille,
            zone: r.zone,
            entreprise_id: r.entreprise_id,
        }
    }
}

/// Only the status and the assigned company change after creation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStandRequest {
    pub statut: StatutStand,
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandResponse {
    pub id: i32,
    pub numero: i32,
    pub statut: StatutStand,
    pub taille: TailleStand,
    pub zone: Option<String>,
    pub entreprise_id: Option<i32>,
}

impl From<Stand> for StandResponse {
    fn from(s: Stand) -> Self {
        Self {
            id: s.id,
            numero: s.numero,
            statut: s.statut,
            taille: s.taille,
            zone: s.zone,
            entreprise_id: s.entreprise_id,
        }
    }
}
