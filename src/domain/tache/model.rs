//! Tache domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatutTache {
    #[default]
    EnAttente,
    EnCours,
    Terminee,
}

impl StatutTache {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnAttente => "EN_ATTENTE",
            Self::EnCours => "EN_COURS",
            Self::Terminee => "TERMINEE",
        }
    }
}

impl std::fmt::Display for StatutTache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StatutTache {
    fn from(s: &str) -> Self {
        match s {
            "EN_COURS" => Self::EnCours,
            "TERMINEE" => Self::Terminee,
            _ => Self::EnAttente,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrioriteTache {
    Low,
    #[default]
    Medium,
    High,
}

impl PrioriteTache {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for PrioriteTache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PrioriteTache {
    fn from(s: &str) -> Self {
        match s {
            "LOW" => Self::Low,
            "HIGH" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Logistics task, optionally assigned to a team member
#[derive(Debug, Clone, PartialEq)]
pub struct Tache {
    pub id: i32,
    pub description: String,
    pub statut: StatutTache,
    pub date_limite: NaiveDate,
    pub priorite: PrioriteTache,
    pub responsable_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewTache {
    pub description: String,
    pub statut: StatutTache,
    pub date_limite: NaiveDate,
    pub priorite: PrioriteTache,
    pub responsable_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_variants_use_underscores() {
        assert_eq!(
            serde_json::to_string(&StatutTache::EnAttente).unwrap(),
            "\"EN_ATTENTE\""
        );
        assert_eq!(
            serde_json::from_str::<StatutTache>("\"EN_COURS\"").unwrap(),
            StatutTache::EnCours
        );
        assert_eq!(StatutTache::from("TERMINEE"), StatutTache::Terminee);
    }

    #[test]
    fn new_tasks_default_to_waiting_medium() {
        assert_eq!(StatutTache::default(), StatutTache::EnAttente);
        assert_eq!(PrioriteTache::default(), PrioriteTache::Medium);
    }
}
