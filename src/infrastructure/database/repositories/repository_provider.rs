//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::conference::ConferenceRepository;
use crate::domain::contrat::ContratRepository;
use crate::domain::entreprise::EntrepriseRepository;
use crate::domain::evenement::EvenementRepository;
use crate::domain::intervenant::IntervenantRepository;
use crate::domain::partenaire::PartenaireRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::salle::SalleRepository;
use crate::domain::stand::StandRepository;
use crate::domain::tache::TacheRepository;
use crate::domain::utilisateur::UtilisateurRepository;

use super::conference_repository::SeaOrmConferenceRepository;
use super::contrat_repository::SeaOrmContratRepository;
use super::entreprise_repository::SeaOrmEntrepriseRepository;
use super::evenement_repository::SeaOrmEvenementRepository;
use super::intervenant_repository::SeaOrmIntervenantRepository;
use super::partenaire_repository::SeaOrmPartenaireRepository;
use super::salle_repository::SeaOrmSalleRepository;
use super::stand_repository::SeaOrmStandRepository;
use super::tache_repository::SeaOrmTacheRepository;
use super::utilisateur_repository::SeaOrmUtilisateurRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let salle = repos.salles().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    entreprises: SeaOrmEntrepriseRepository,
    stands: SeaOrmStandRepository,
    intervenants: SeaOrmIntervenantRepository,
    salles: SeaOrmSalleRepository,
    conferences: SeaOrmConferenceRepository,
    evenements: SeaOrmEvenementRepository,
    partenaires: SeaOrmPartenaireRepository,
    contrats: SeaOrmContratRepository,
    taches: SeaOrmTacheRepository,
    utilisateurs: SeaOrmUtilisateurRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            entreprises: SeaOrmEntrepriseRepository::new(db.clone()),
            stands: SeaOrmStandRepository::new(db.clone()),
            intervenants: SeaOrmIntervenantRepository::new(db.clone()),
            salles: SeaOrmSalleRepository::new(db.clone()),
            conferences: SeaOrmConferenceRepository::new(db.clone()),
            evenements: SeaOrmEvenementRepository::new(db.clone()),
            partenaires: SeaOrmPartenaireRepository::new(db.clone()),
            contrats: SeaOrmContratRepository::new(db.clone()),
            taches: SeaOrmTacheRepository::new(db.clone()),
            utilisateurs: SeaOrmUtilisateurRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn entreprises(&self) -> &dyn EntrepriseRepository {
        &self.entreprises
    }

    fn stands(&self) -> &dyn StandRepository {
        &self.stands
    }

    fn intervenants(&self) -> &dyn IntervenantRepository {
        &self.intervenants
    }

    fn salles(&self) -> &dyn SalleRepository {
        &self.salles
    }

    fn conferences(&self) -> &dyn ConferenceRepository {
        &self.conferences
    }

    fn evenements(&self) -> &dyn EvenementRepository {
        &self.evenements
    }

    fn partenaires(&self) -> &dyn PartenaireRepository {
        &self.partenaires
    }

    fn contrats(&self) -> &dyn ContratRepository {
        &self.contrats
    }

    fn taches(&self) -> &dyn TacheRepository {
        &self.taches
    }

    fn utilisateurs(&self) -> &dyn UtilisateurRepository {
        &self.utilisateurs
    }
}
