//! Utilisateur aggregate
//!
//! Staff accounts. Logistics team members are users carrying
//! `Role::Equipier`; administrators carry `Role::Admin`.

pub mod model;
pub mod permission;
pub mod repository;

pub use model::{NewUtilisateur, Role, Utilisateur};
pub use permission::Permission;
pub use repository::UtilisateurRepository;
