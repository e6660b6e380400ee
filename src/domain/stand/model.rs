//! Stand domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booth occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatutStand {
    #[default]
    Libre,
    Occupe,
    Reserve,
}

impl StatutStand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Libre => "LIBRE",
            Self::Occupe => "OCCUPE",
            Self::Reserve => "RESERVE",
        }
    }
}

impl std::fmt::Display for StatutStand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StatutStand {
    fn from(s: &str) -> Self {
        match s {
            "OCCUPE" => Self::Occupe,
            "RESERVE" => Self::Reserve,
            _ => Self::Libre,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TailleStand {
    Small,
    #[default]
    Medium,
    Large,
}

impl TailleStand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
        }
    }
}

impl std::fmt::Display for TailleStand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TailleStand {
    fn from(s: &str) -> Self {
        match s {
            "SMALL" => Self::Small,
            "LARGE" => Self::Large,
            _ => Self::Medium,
        }
    }
}

/// Exhibition booth. `numero` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Stand {
    pub id: i32,
    pub numero: i32,
    pub statut: StatutStand,
    pub taille: TailleStand,
    pub zone: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewStand {
    pub numero: i32,
    pub statut: StatutStand,
    pub taille: TailleStand,
    pub zone: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_booth() {
        assert_eq!(StatutStand::default(), StatutStand::Libre);
        assert_eq!(TailleStand::default(), TailleStand::Medium);
    }

    #[test]
    fn stored_strings_round_trip() {
        for s in [StatutStand::Libre, StatutStand::Occupe, StatutStand::Reserve] {
            assert_eq!(StatutStand::from(s.as_str()), s);
        }
        for t in [TailleStand::Small, TailleStand::Medium, TailleStand::Large] {
            assert_eq!(TailleStand::from(t.as_str()), t);
        }
    }
}
