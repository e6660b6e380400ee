//! Contrat DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::contrat::{Contrat, TypeContrat};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContratRequest {
    #[validate(
        custom(function = "crate::shared::not_blank"),
        length(max = 64, message = "L'identifiant ne doit pas dépasser 64 caractères")
    )]
    pub id: String,
    /// Defaults to the base amount of `type`
    #[validate(range(exclusive_min = 0.0, message = "Le montant doit être positif"))]
    pub montant: Option<f64>,
    #[serde(rename = "type")]
    pub type_contrat: TypeContrat,
    pub date: NaiveDate,
}

impl From<CreateContratRequest> for Contrat {
    fn from(r: CreateContratRequest) -> Self {
        Self {
            montant: r.montant.unwrap_or_else(|| r.type_contrat.base_amount()),
            id: r.id,
            type_contrat: r.type_contrat,
            date: r.date,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContratRequest {
    /// Defaults to the base amount of `type`
    #[validate(range(exclusive_min = 0.0, message = "Le montant doit être positif"))]
    pub montant: Option<f64>,
    #[serde(rename = "type")]
    pub type_contrat: TypeContrat,
    pub date: NaiveDate,
}

impl UpdateContratRequest {
    pub fn into_contrat(self, id: String) -> Contrat {
        Contrat {
            id,
            montant: self
                .montant
                .unwrap_or_else(|| self.type_contrat.base_amount()),
            type_contrat: self.type_contrat,
            date: self.date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratResponse {
    pub id: String,
    pub montant: f64,
    #[serde(rename = "type")]
    pub type_contrat: TypeContrat,
    pub date: NaiveDate,
}

impl From<Contrat> for ContratResponse {
    fn from(c: Contrat) -> Self {
        Self {
            id: c.id,
            montant: c.montant,
            type_contrat: c.type_contrat,
            date: c.date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeContratResponse {
    #[serde(rename = "type")]
    pub type_contrat: TypeContrat,
    pub display_name: String,
    pub base_amount: f64,
}

impl From<TypeContrat> for TypeContratResponse {
    fn from(t: TypeContrat) -> Self {
        Self {
            type_contrat: t,
            display_name: t.display_name().to_string(),
            base_amount: t.base_amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amount_falls_back_to_base_amount() {
        let request: CreateContratRequest = serde_json::from_value(serde_json::json!({
            "id": "CTR-2025-01",
            "type": "GOLD",
            "date": "2025-02-01"
        }))
        .unwrap();
        let contrat = Contrat::from(request);
        assert_eq!(contrat.montant, 15000.0);
        assert_eq!(contrat.type_contrat, TypeContrat::Gold);
    }

    #[test]
    fn non_positive_amount_is_invalid() {
        let request: UpdateContratRequest = serde_json::from_value(serde_json::json!({
            "montant": 0.0,
            "type": "SILVER",
            "date": "2025-02-01"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
