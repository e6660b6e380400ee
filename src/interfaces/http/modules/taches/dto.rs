//! Tache DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::tache::{NewTache, PrioriteTache, StatutTache, Tache};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTacheRequest {
    #[validate(custom(function = "crate::shared::not_blank"))]
    pub description: String,
    #[serde(default)]
    pub statut: StatutTache,
    pub date_limite: NaiveDate,
    #[serde(default)]
    pub priorite: PrioriteTache,
    pub responsable_id: Option<i32>,
}

impl From<CreateTacheRequest> for NewTache {
    fn from(r: CreateTacheRequest) -> Self {
        Self {
            description: r.description,
            statut: r.statut,
            date_limite: r.date_limite,
            priorite: r.priorite,
            responsable_id: r.responsable_id,
        }
    }
}

/// The assignee is kept on update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTacheRequest {
    #[validate(custom(function = "crate::shared::not_blank"))]
    pub description: String,
    pub statut: StatutTache,
    pub date_limite: NaiveDate,
    pub priorite: PrioriteTache,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TacheResponse {
    pub id: i32,
    pub description: String,
    pub statut: StatutTache,
    pub date_limite: NaiveDate,
    pub priorite: PrioriteTache,
    pub responsable_id: Option<i32>,
}

impl From<Tache> for TacheResponse {
    fn from(t: Tache) -> Self {
        Self {
            id: t.id,
            description: t.description,
            statut: t.statut,
            date_limite: t.date_limite,
            priorite: t.priorite,
            responsable_id: t.responsable_id,
        }
    }
}
