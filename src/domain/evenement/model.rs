//! Evenement domain entity

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Evenement {
    pub id: i32,
    pub nom: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub lieu: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewEvenement {
    pub nom: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub lieu: Option<String>,
}
