//! Intervenant domain entity

/// Conference speaker, optionally attached to a company
#[derive(Debug, Clone, PartialEq)]
pub struct Intervenant {
    pub id: i32,
    pub nom: String,
    pub biographie: Option<String>,
    pub specialite: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewIntervenant {
    pub nom: String,
    pub biographie: Option<String>,
    pub specialite: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub entreprise_id: Option<i32>,
}
