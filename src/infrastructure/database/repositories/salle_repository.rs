//! SeaORM implementation of SalleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::salle::{Salle, SalleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::salle;

pub struct SeaOrmSalleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSalleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: salle::Model) -> Salle {
    Salle {
        id: model.id,
        numero: model.numero,
        capacite: model.capacite,
    }
}

#[async_trait]
impl SalleRepository for SeaOrmSalleRepository {
    async fn create(&self, numero: i32, capacite: i32) -> DomainResult<Salle> {
        let model = salle::ActiveModel {
            id: NotSet,
            numero: Set(numero),
            capacite: Set(capacite),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, numero, capacite, "Salle created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Salle>> {
        let models = salle::Entity::find()
            .order_by_asc(salle::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Salle>> {
        let model = salle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn exists_by_numero(&self, numero: i32) -> DomainResult<bool> {
        let count = salle::Entity::find()
            .filter(salle::Column::Numero.eq(numero))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        salle::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn update(&self, s: Salle) -> DomainResult<Salle> {
        debug!(id = s.id, "Updating salle");

        if self.find_by_id(s.id).await?.is_none() {
            return Err(DomainError::not_found("Salle", s.id));
        }

        let model = salle::ActiveModel {
            id: Set(s.id),
            numero: Set(s.numero),
            capacite: Set(s.capacite),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = salle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Salle", id));
        }
        Ok(())
    }
}
