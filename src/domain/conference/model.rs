//! Conference domain entity

use chrono::NaiveDateTime;

/// Scheduled talk, held in an optional room with any number of speakers
#[derive(Debug, Clone, PartialEq)]
pub struct Conference {
    pub id: i32,
    pub titre: String,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
    pub salle_id: Option<i32>,
    /// Sorted, without duplicates
    pub intervenant_ids: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewConference {
    pub titre: String,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
    pub salle_id: Option<i32>,
    pub intervenant_ids: Vec<i32>,
}
