//! Contrat domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sponsorship tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeContrat {
    Silver,
    Gold,
    Diamond,
}

impl TypeContrat {
    pub const ALL: [TypeContrat; 3] = [Self::Silver, Self::Gold, Self::Diamond];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Diamond => "DIAMOND",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Diamond => "Diamond",
        }
    }

    /// Amount used when a contract is created without one
    pub fn base_amount(&self) -> f64 {
        match self {
            Self::Silver => 5000.0,
            Self::Gold => 15000.0,
            Self::Diamond => 30000.0,
        }
    }
}

impl std::fmt::Display for TypeContrat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TypeContrat {
    fn from(s: &str) -> Self {
        match s {
            "GOLD" => Self::Gold,
            "DIAMOND" => Self::Diamond,
            _ => Self::Silver,
        }
    }
}

/// Sponsorship contract. The id is chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Contrat {
    pub id: String,
    pub montant: f64,
    pub type_contrat: TypeContrat,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_amounts_grow_with_tier() {
        assert_eq!(TypeContrat::Silver.base_amount(), 5000.0);
        assert_eq!(TypeContrat::Gold.base_amount(), 15000.0);
        assert_eq!(TypeContrat::Diamond.base_amount(), 30000.0);
    }

    #[test]
    fn wire_name_is_upper_case() {
        assert_eq!(
            serde_json::to_string(&TypeContrat::Diamond).unwrap(),
            "\"DIAMOND\""
        );
        assert_eq!(TypeContrat::from("GOLD"), TypeContrat::Gold);
    }
}
