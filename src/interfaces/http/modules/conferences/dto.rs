//! Conference DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::conference::{Conference, NewConference};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 200, message = "Le titre ne doit pas dépasser 200 caractères")
    )]
    pub titre: String,
    /// ISO date-time, e.g. "2025-03-12T09:00:00"
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
    pub salle_id: Option<i32>,
    /// Replaces the speaker set on update
    #[serde(default)]
    pub intervenant_ids: Vec<i32>,
}

impl ConferenceRequest {
    pub fn into_conference(self, id: i32) -> Conference {
        Conference {
            id,
            titre: self.titre,
            date_debut: self.date_debut,
            date_fin: self.date_fin,
            salle_id: self.salle_id,
            intervenant_ids: self.intervenant_ids,
        }
    }
}

impl From<ConferenceRequest> for NewConference {
    fn from(r: ConferenceRequest) -> Self {
        Self {
            titre: r.titre,
            date_debut: r.date_debut,
            date_fin: r.date_fin,
            salle_id: r.salle_id,
            intervenant_ids: r.intervenant_ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceResponse {
    pub id: i32,
    pub titre: String,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
    pub salle_id: Option<i32>,
    pub intervenant_ids: Vec<i32>,
}

impl From<Conference> for ConferenceResponse {
    fn from(c: Conference) -> Self {
        Self {
            id: c.id,
            titre: c.titre,
            date_debut: c.date_debut,
            date_fin: c.date_fin,
            salle_id: c.salle_id,
            intervenant_ids: c.intervenant_ids,
        }
    }
}
