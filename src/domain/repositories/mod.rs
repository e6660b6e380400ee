//! Repository provider for the domain layer

use super::conference::ConferenceRepository;
use super::contrat::ContratRepository;
use super::entreprise::EntrepriseRepository;
use super::evenement::EvenementRepository;
use super::intervenant::IntervenantRepository;
use super::partenaire::PartenaireRepository;
use super::salle::SalleRepository;
use super::stand::StandRepository;
use super::tache::TacheRepository;
use super::utilisateur::UtilisateurRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let stands = repos.stands().find_by_zone("A").await?;
///     let user = repos.utilisateurs().find_by_email("admin@emi.ac.ma").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn entreprises(&self) -> &dyn EntrepriseRepository;
    fn stands(&self) -> &dyn StandRepository;
    fn intervenants(&self) -> &dyn IntervenantRepository;
    fn salles(&self) -> &dyn SalleRepository;
    fn conferences(&self) -> &dyn ConferenceRepository;
    fn evenements(&self) -> &dyn EvenementRepository;
    fn partenaires(&self) -> &dyn PartenaireRepository;
    fn contrats(&self) -> &dyn ContratRepository;
    fn taches(&self) -> &dyn TacheRepository;
    fn utilisateurs(&self) -> &dyn UtilisateurRepository;
}
