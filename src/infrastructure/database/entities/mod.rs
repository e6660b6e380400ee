//! Database entities module

pub mod conference;
pub mod conference_intervenant;
pub mod contrat;
pub mod entreprise;
pub mod evenement;
pub mod intervenant;
pub mod partenaire;
pub mod salle;
pub mod stand;
pub mod tache;
pub mod utilisateur;

pub use conference::Entity as Conference;
pub use conference_intervenant::Entity as ConferenceIntervenant;
pub use contrat::Entity as Contrat;
pub use entreprise::Entity as Entreprise;
pub use evenement::Entity as Evenement;
pub use intervenant::Entity as Intervenant;
pub use partenaire::Entity as Partenaire;
pub use salle::Entity as Salle;
pub use stand::Entity as Stand;
pub use tache::Entity as Tache;
pub use utilisateur::Entity as Utilisateur;
