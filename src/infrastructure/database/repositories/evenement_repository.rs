//! SeaORM implementation of EvenementRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::evenement::{Evenement, EvenementRepository, NewEvenement};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{contrat, evenement, partenaire};

pub struct SeaOrmEvenementRepository {
    db: DatabaseConnection,
}

impl SeaOrmEvenementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: evenement::Model) -> Evenement {
    Evenement {
        id: model.id,
        nom: model.nom,
        date_debut: model.date_debut,
        date_fin: model.date_fin,
        lieu: model.lieu,
    }
}

#[async_trait]
impl EvenementRepository for SeaOrmEvenementRepository {
    async fn create(&self, e: NewEvenement) -> DomainResult<Evenement> {
        let model = evenement::ActiveModel {
            id: NotSet,
            nom: Set(e.nom),
            date_debut: Set(e.date_debut),
            date_fin: Set(e.date_fin),
            lieu: Set(e.lieu),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, nom = %model.nom, "Evenement created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Evenement>> {
        let models = evenement::Entity::find()
            .order_by_asc(evenement::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Evenement>> {
        let model = evenement::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn update(&self, e: Evenement) -> DomainResult<Evenement> {
        debug!(id = e.id, "Updating evenement");

        if self.find_by_id(e.id).await?.is_none() {
            return Err(DomainError::not_found("Evenement", e.id));
        }

        let model = evenement::ActiveModel {
            id: Set(e.id),
            nom: Set(e.nom),
            date_debut: Set(e.date_debut),
            date_fin: Set(e.date_fin),
            lieu: Set(e.lieu),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let contrat_ids: Vec<String> = partenaire::Entity::find()
            .filter(partenaire::Column::EvenementId.eq(id))
            .all(&txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .filter_map(|p| p.contrat_id)
            .collect();

        // partenaires go with the event through the foreign key
        let result = evenement::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Evenement", id));
        }

        if !contrat_ids.is_empty() {
            contrat::Entity::delete_many()
                .filter(contrat::Column::Id.is_in(contrat_ids.clone()))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        info!(id, contrats = contrat_ids.len(), "Evenement deleted");
        Ok(())
    }
}
