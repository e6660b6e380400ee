//! SeaORM implementation of ContratRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{debug, info};

use super::db_err;
use crate::domain::contrat::{Contrat, ContratRepository, TypeContrat};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::contrat;

pub struct SeaOrmContratRepository {
    db: DatabaseConnection,
}

impl SeaOrmContratRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: contrat::Model) -> Contrat {
    Contrat {
        id: model.id,
        montant: model.montant,
        type_contrat: TypeContrat::from(model.type_contrat.as_str()),
        date: model.date,
    }
}

fn to_active(c: Contrat) -> contrat::ActiveModel {
    contrat::ActiveModel {
        id: Set(c.id),
        montant: Set(c.montant),
        type_contrat: Set(c.type_contrat.to_string()),
        date: Set(c.date),
    }
}

#[async_trait]
impl ContratRepository for SeaOrmContratRepository {
    async fn create(&self, c: Contrat) -> DomainResult<Contrat> {
        debug!(id = %c.id, "Creating contrat");

        if self.find_by_id(&c.id).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Contrat '{}' already exists",
                c.id
            )));
        }

        let model = to_active(c).insert(&self.db).await.map_err(db_err)?;

        info!(id = %model.id, montant = model.montant, "Contrat created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Contrat>> {
        let models = contrat::Entity::find()
            .order_by_asc(contrat::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Contrat>> {
        let model = contrat::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn update(&self, c: Contrat) -> DomainResult<Contrat> {
        if self.find_by_id(&c.id).await?.is_none() {
            return Err(DomainError::not_found("Contrat", &c.id));
        }

        let model = to_active(c).update(&self.db).await.map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = contrat::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Contrat", id));
        }
        Ok(())
    }
}
