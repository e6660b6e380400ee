//! SeaORM implementation of IntervenantRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{debug, info};

use super::db_err;
use crate::domain::intervenant::{Intervenant, IntervenantRepository, NewIntervenant};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::intervenant;

pub struct SeaOrmIntervenantRepository {
    db: DatabaseConnection,
}

impl SeaOrmIntervenantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: intervenant::Model) -> Intervenant {
    Intervenant {
        id: model.id,
        nom: model.nom,
        biographie: model.biographie,
        specialite: model.specialite,
        email: model.email,
        telephone: model.telephone,
        entreprise_id: model.entreprise_id,
    }
}

#[async_trait]
impl IntervenantRepository for SeaOrmIntervenantRepository {
    async fn create(&self, i: NewIntervenant) -> DomainResult<Intervenant> {
        let model = intervenant::ActiveModel {
            id: NotSet,
            nom: Set(i.nom),
            biographie: Set(i.biographie),
            specialite: Set(i.specialite),
            email: Set(i.email),
            telephone: Set(i.telephone),
            entreprise_id: Set(i.entreprise_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, "Intervenant created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Intervenant>> {
        let models = intervenant::Entity::find()
            .order_by_asc(intervenant::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Intervenant>> {
        let model = intervenant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn update(&self, i: Intervenant) -> DomainResult<Intervenant> {
        debug!(id = i.id, "Updating intervenant");

        if self.find_by_id(i.id).await?.is_none() {
            return Err(DomainError::not_found("Intervenant", i.id));
        }

        let model = intervenant::ActiveModel {
            id: Set(i.id),
            nom: Set(i.nom),
            biographie: Set(i.biographie),
            specialite: Set(i.specialite),
            email: Set(i.email),
            telephone: Set(i.telephone),
            entreprise_id: Set(i.entreprise_id),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = intervenant::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Intervenant", id));
        }
        Ok(())
    }
}
