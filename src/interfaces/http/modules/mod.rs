//! REST resources, one module per aggregate, plus operational endpoints

pub mod auth;
pub mod conferences;
pub mod contrats;
pub mod entreprises;
pub mod evenements;
pub mod health;
pub mod intervenants;
pub mod metrics;
pub mod partenaires;
pub mod request_id;
pub mod salles;
pub mod stands;
pub mod taches;
pub mod utilisateurs;
