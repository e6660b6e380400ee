//! Partenaire domain entity

/// Sponsor of an event, bound to at most one contract
#[derive(Debug, Clone, PartialEq)]
pub struct Partenaire {
    pub id: i32,
    pub nom: String,
    pub contrat_id: Option<String>,
    pub evenement_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPartenaire {
    pub nom: String,
    pub contrat_id: Option<String>,
    pub evenement_id: Option<i32>,
}
