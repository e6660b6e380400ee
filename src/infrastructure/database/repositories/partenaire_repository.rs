//! SeaORM implementation of PartenaireRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::partenaire::{NewPartenaire, Partenaire, PartenaireRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{contrat, partenaire};

pub struct SeaOrmPartenaireRepository {
    db: DatabaseConnection,
}

impl SeaOrmPartenaireRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: partenaire::Model) -> Partenaire {
    Partenaire {
        id: model.id,
        nom: model.nom,
        contrat_id: model.contrat_id,
        evenement_id: model.evenement_id,
    }
}

#[async_trait]
impl PartenaireRepository for SeaOrmPartenaireRepository {
    async fn create(&self, p: NewPartenaire) -> DomainResult<Partenaire> {
        let model = partenaire::ActiveModel {
            id: NotSet,
            nom: Set(p.nom),
            contrat_id: Set(p.contrat_id),
            evenement_id: Set(p.evenement_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, nom = %model.nom, "Partenaire created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Partenaire>> {
        let models = partenaire::Entity::find()
            .order_by_asc(partenaire::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Partenaire>> {
        let model = partenaire::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn update(&self, p: Partenaire) -> DomainResult<Partenaire> {
        debug!(id = p.id, "Updating partenaire");

        if self.find_by_id(p.id).await?.is_none() {
            return Err(DomainError::not_found("Partenaire", p.id));
        }

        let model = partenaire::ActiveModel {
            id: Set(p.id),
            nom: Set(p.nom),
            contrat_id: Set(p.contrat_id),
            evenement_id: Set(p.evenement_id),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let Some(existing) = partenaire::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
        else {
            return Err(DomainError::not_found("Partenaire", id));
        };

        partenaire::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if let Some(contrat_id) = &existing.contrat_id {
            contrat::Entity::delete_by_id(contrat_id.as_str())
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        info!(id, contrat = ?existing.contrat_id, "Partenaire deleted");
        Ok(())
    }
}
