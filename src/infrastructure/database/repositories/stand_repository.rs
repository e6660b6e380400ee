//! SeaORM implementation of StandRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::stand::{NewStand, Stand, StandRepository, StatutStand, TailleStand};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::stand;

pub struct SeaOrmStandRepository {
    db: DatabaseConnection,
}

impl SeaOrmStandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: stand::Model) -> Stand {
    Stand {
        id: model.id,
        numero: model.numero,
        statut: StatutStand::from(model.statut.as_str()),
        taille: TailleStand::from(model.taille.as_str()),
        zone: model.zone,
        entreprise_id: model.entreprise_id,
    }
}

#[async_trait]
impl StandRepository for SeaOrmStandRepository {
    async fn create(&self, s: NewStand) -> DomainResult<Stand> {
        let model = stand::ActiveModel {
            id: NotSet,
            numero: Set(s.numero),
            statut: Set(s.statut.to_string()),
            taille: Set(s.taille.to_string()),
            zone: Set(s.zone),
            entreprise_id: Set(s.entreprise_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, numero = model.numero, "Stand created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Stand>> {
        let models = stand::Entity::find()
            .order_by_asc(stand::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Stand>> {
        let model = stand::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn find_by_zone(&self, zone: &str) -> DomainResult<Vec<Stand>> {
        let models = stand::Entity::find()
            .filter(stand::Column::Zone.eq(zone))
            .order_by_asc(stand::Column::Numero)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn exists_by_numero(&self, numero: i32) -> DomainResult<bool> {
        let count = stand::Entity::find()
            .filter(stand::Column::Numero.eq(numero))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(&self, s: Stand) -> DomainResult<Stand> {
        debug!(id = s.id, "Updating stand");

        if self.find_by_id(s.id).await?.is_none() {
            return Err(DomainError::not_found("Stand", s.id));
        }

        let model = stand::ActiveModel {
            id: Set(s.id),
            numero: Set(s.numero),
            statut: Set(s.statut.to_string()),
            taille: Set(s.taille.to_string()),
            zone: Set(s.zone),
            entreprise_id: Set(s.entreprise_id),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = stand::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Stand", id));
        }
        Ok(())
    }
}
