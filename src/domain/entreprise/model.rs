//! Entreprise domain entity

/// Exhibiting company. `nom` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Entreprise {
    pub id: i32,
    pub nom: String,
}
