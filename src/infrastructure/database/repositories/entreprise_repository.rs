//! SeaORM implementation of EntrepriseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::entreprise::{Entreprise, EntrepriseRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::entreprise;

pub struct SeaOrmEntrepriseRepository {
    db: DatabaseConnection,
}

impl SeaOrmEntrepriseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: entreprise::Model) -> Entreprise {
    Entreprise {
        id: model.id,
        nom: model.nom,
    }
}

#[async_trait]
impl EntrepriseRepository for SeaOrmEntrepriseRepository {
    async fn create(&self, nom: &str) -> DomainResult<Entreprise> {
        let model = entreprise::ActiveModel {
            id: NotSet,
            nom: Set(nom.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, nom = %model.nom, "Entreprise created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Entreprise>> {
        let models = entreprise::Entity::find()
            .order_by_asc(entreprise::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Entreprise>> {
        let model = entreprise::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn exists_by_nom(&self, nom: &str) -> DomainResult<bool> {
        let count = entreprise::Entity::find()
            .filter(entreprise::Column::Nom.eq(nom))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(&self, e: Entreprise) -> DomainResult<Entreprise> {
        debug!(id = e.id, "Updating entreprise");

        if self.find_by_id(e.id).await?.is_none() {
            return Err(DomainError::not_found("Entreprise", e.id));
        }

        let model = entreprise::ActiveModel {
            id: Set(e.id),
            nom: Set(e.nom),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        // stands are detached and intervenants removed by the foreign keys
        let result = entreprise::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Entreprise", id));
        }
        info!(id, "Entreprise deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_db;
    use super::super::intervenant_repository::SeaOrmIntervenantRepository;
    use super::super::stand_repository::SeaOrmStandRepository;
    use super::*;
    use crate::domain::intervenant::{IntervenantRepository, NewIntervenant};
    use crate::domain::stand::{NewStand, StandRepository};

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let repo = SeaOrmEntrepriseRepository::new(test_db().await);
        repo.create("OCP").await.unwrap();

        assert!(repo.exists_by_nom("OCP").await.unwrap());
        assert!(!repo.exists_by_nom("ocp group").await.unwrap());
        assert!(matches!(
            repo.create("OCP").await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn delete_detaches_stands_and_removes_speakers() {
        let db = test_db().await;
        let entreprises = SeaOrmEntrepriseRepository::new(db.clone());
        let stands = SeaOrmStandRepository::new(db.clone());
        let intervenants = SeaOrmIntervenantRepository::new(db);

        let ent = entreprises.create("Capgemini").await.unwrap();
        let stand = stands
            .create(NewStand {
                numero: 12,
                statut: Default::default(),
                taille: Default::default(),
                zone: Some("B".into()),
                entreprise_id: Some(ent.id),
            })
            .await
            .unwrap();
        let speaker = intervenants
            .create(NewIntervenant {
                nom: "Benali".into(),
                biographie: None,
                specialite: None,
                email: None,
                telephone: None,
                entreprise_id: Some(ent.id),
            })
            .await
            .unwrap();

        entreprises.delete(ent.id).await.unwrap();

        let stand = stands.find_by_id(stand.id).await.unwrap().unwrap();
        assert_eq!(stand.entreprise_id, None);
        assert!(intervenants.find_by_id(speaker.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repo = SeaOrmEntrepriseRepository::new(test_db().await);
        assert!(matches!(
            repo.delete(99).await,
            Err(DomainError::NotFound { .. })
        ));
        let ghost = Entreprise {
            id: 99,
            nom: "Ghost".into(),
        };
        assert!(matches!(
            repo.update(ghost).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
