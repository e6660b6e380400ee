//! SeaORM implementation of ConferenceRepository
//!
//! Speakers live in the `conference_intervenants` join table and are
//! rewritten together with the conference row inside one transaction.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::conference::{Conference, ConferenceRepository, NewConference};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{conference, conference_intervenant};

pub struct SeaOrmConferenceRepository {
    db: DatabaseConnection,
}

impl SeaOrmConferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: conference::Model, intervenant_ids: Vec<i32>) -> Conference {
    Conference {
        id: model.id,
        titre: model.titre,
        date_debut: model.date_debut,
        date_fin: model.date_fin,
        salle_id: model.salle_id,
        intervenant_ids,
    }
}

fn normalize(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

async fn load_intervenant_ids<C: ConnectionTrait>(
    db: &C,
    conference_id: i32,
) -> DomainResult<Vec<i32>> {
    let rows = conference_intervenant::Entity::find()
        .filter(conference_intervenant::Column::ConferenceId.eq(conference_id))
        .order_by_asc(conference_intervenant::Column::IntervenantId)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(rows.into_iter().map(|r| r.intervenant_id).collect())
}

async fn replace_intervenants<C: ConnectionTrait>(
    db: &C,
    conference_id: i32,
    intervenant_ids: &[i32],
) -> DomainResult<()> {
    conference_intervenant::Entity::delete_many()
        .filter(conference_intervenant::Column::ConferenceId.eq(conference_id))
        .exec(db)
        .await
        .map_err(db_err)?;

    if intervenant_ids.is_empty() {
        return Ok(());
    }

    let rows = intervenant_ids
        .iter()
        .map(|&intervenant_id| conference_intervenant::ActiveModel {
            conference_id: Set(conference_id),
            intervenant_id: Set(intervenant_id),
        });
    conference_intervenant::Entity::insert_many(rows)
        .exec(db)
        .await
        .map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl ConferenceRepository for SeaOrmConferenceRepository {
    async fn create(&self, c: NewConference) -> DomainResult<Conference> {
        let intervenant_ids = normalize(&c.intervenant_ids);
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = conference::ActiveModel {
            id: NotSet,
            titre: Set(c.titre),
            date_debut: Set(c.date_debut),
            date_fin: Set(c.date_fin),
            salle_id: Set(c.salle_id),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        replace_intervenants(&txn, model.id, &intervenant_ids).await?;
        txn.commit().await.map_err(db_err)?;

        info!(id = model.id, speakers = intervenant_ids.len(), "Conference created");
        Ok(from_model(model, intervenant_ids))
    }

    async fn find_all(&self) -> DomainResult<Vec<Conference>> {
        let models = conference::Entity::find()
            .order_by_asc(conference::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let links = conference_intervenant::Entity::find()
            .order_by_asc(conference_intervenant::Column::IntervenantId)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut by_conference: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            by_conference
                .entry(link.conference_id)
                .or_default()
                .push(link.intervenant_id);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let ids = by_conference.remove(&m.id).unwrap_or_default();
                from_model(m, ids)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Conference>> {
        let model = conference::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let ids = load_intervenant_ids(&self.db, id).await?;
        Ok(Some(from_model(model, ids)))
    }

    async fn update(&self, c: Conference) -> DomainResult<Conference> {
        debug!(id = c.id, "Updating conference");

        let intervenant_ids = normalize(&c.intervenant_ids);
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = conference::Entity::find_by_id(c.id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Conference", c.id));
        }

        let model = conference::ActiveModel {
            id: Set(c.id),
            titre: Set(c.titre),
            date_debut: Set(c.date_debut),
            date_fin: Set(c.date_fin),
            salle_id: Set(c.salle_id),
        }
        .update(&txn)
        .await
        .map_err(db_err)?;

        replace_intervenants(&txn, model.id, &intervenant_ids).await?;
        txn.commit().await.map_err(db_err)?;

        Ok(from_model(model, intervenant_ids))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        conference_intervenant::Entity::delete_many()
            .filter(conference_intervenant::Column::ConferenceId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = conference::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Conference", id));
        }
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::intervenant_repository::SeaOrmIntervenantRepository;
    use super::super::salle_repository::SeaOrmSalleRepository;
    use super::super::test_support::test_db;
    use super::*;
    use crate::domain::intervenant::{IntervenantRepository, NewIntervenant};
    use crate::domain::salle::SalleRepository;

    fn speaker(nom: &str) -> NewIntervenant {
        NewIntervenant {
            nom: nom.into(),
            biographie: None,
            specialite: Some("IA".into()),
            email: None,
            telephone: None,
            entreprise_id: None,
        }
    }

    fn at(hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn speakers_are_stored_sorted_and_deduplicated() {
        let db = test_db().await;
        let intervenants = SeaOrmIntervenantRepository::new(db.clone());
        let repo = SeaOrmConferenceRepository::new(db);

        let a = intervenants.create(speaker("Alaoui")).await.unwrap();
        let b = intervenants.create(speaker("Berrada")).await.unwrap();

        let created = repo
            .create(NewConference {
                titre: "Cloud souverain".into(),
                date_debut: at(9),
                date_fin: at(10),
                salle_id: None,
                intervenant_ids: vec![b.id, a.id, b.id],
            })
            .await
            .unwrap();
        assert_eq!(created.intervenant_ids, vec![a.id, b.id]);

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let mut changed = fetched.clone();
        changed.intervenant_ids = vec![b.id];
        repo.update(changed).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].intervenant_ids, vec![b.id]);
    }

    #[tokio::test]
    async fn deleting_a_room_or_speaker_detaches_it() {
        let db = test_db().await;
        let salles = SeaOrmSalleRepository::new(db.clone());
        let intervenants = SeaOrmIntervenantRepository::new(db.clone());
        let repo = SeaOrmConferenceRepository::new(db);

        let salle = salles.create(1, 480).await.unwrap();
        let a = intervenants.create(speaker("Alaoui")).await.unwrap();

        let conf = repo
            .create(NewConference {
                titre: "Cybersécurité".into(),
                date_debut: at(14),
                date_fin: at(15),
                salle_id: Some(salle.id),
                intervenant_ids: vec![a.id],
            })
            .await
            .unwrap();

        salles.delete(salle.id).await.unwrap();
        intervenants.delete(a.id).await.unwrap();

        let stored = repo.find_by_id(conf.id).await.unwrap().unwrap();
        assert_eq!(stored.salle_id, None);
        assert!(stored.intervenant_ids.is_empty());
    }

    #[tokio::test]
    async fn unknown_speaker_rolls_back_the_insert() {
        let repo = SeaOrmConferenceRepository::new(test_db().await);
        let result = repo
            .create(NewConference {
                titre: "Fantôme".into(),
                date_debut: at(9),
                date_fin: at(10),
                salle_id: None,
                intervenant_ids: vec![42],
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
