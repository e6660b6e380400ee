//! Salle domain entity

/// Conference room. `numero` is unique, `capacite` at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Salle {
    pub id: i32,
    pub numero: i32,
    pub capacite: i32,
}
