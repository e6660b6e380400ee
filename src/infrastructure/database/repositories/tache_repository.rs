//! SeaORM implementation of TacheRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{debug, info};

use super::db_err;
use crate::domain::tache::{NewTache, PrioriteTache, StatutTache, Tache, TacheRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::tache;

pub struct SeaOrmTacheRepository {
    db: DatabaseConnection,
}

impl SeaOrmTacheRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: tache::Model) -> Tache {
    Tache {
        id: model.id,
        description: model.description,
        statut: StatutTache::from(model.statut.as_str()),
        date_limite: model.date_limite,
        priorite: PrioriteTache::from(model.priorite.as_str()),
        responsable_id: model.responsable_id,
    }
}

#[async_trait]
impl TacheRepository for SeaOrmTacheRepository {
    async fn create(&self, t: NewTache) -> DomainResult<Tache> {
        let model = tache::ActiveModel {
            id: NotSet,
            description: Set(t.description),
            statut: Set(t.statut.to_string()),
            date_limite: Set(t.date_limite),
            priorite: Set(t.priorite.to_string()),
            responsable_id: Set(t.responsable_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, responsable = ?model.responsable_id, "Tache created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Tache>> {
        let models = tache::Entity::find()
            .order_by_asc(tache::Column::DateLimite)
            .order_by_asc(tache::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tache>> {
        let model = tache::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn update(&self, t: Tache) -> DomainResult<Tache> {
        debug!(id = t.id, statut = %t.statut, "Updating tache");

        if self.find_by_id(t.id).await?.is_none() {
            return Err(DomainError::not_found("Tache", t.id));
        }

        let model = tache::ActiveModel {
            id: Set(t.id),
            description: Set(t.description),
            statut: Set(t.statut.to_string()),
            date_limite: Set(t.date_limite),
            priorite: Set(t.priorite.to_string()),
            responsable_id: Set(t.responsable_id),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = tache::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Tache", id));
        }
        Ok(())
    }
}
