//! SeaORM implementation of UtilisateurRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::utilisateur::{NewUtilisateur, Role, Utilisateur, UtilisateurRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::utilisateur;

pub struct SeaOrmUtilisateurRepository {
    db: DatabaseConnection,
}

impl SeaOrmUtilisateurRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_model(model: utilisateur::Model) -> Utilisateur {
    Utilisateur {
        id: model.id,
        nom: model.nom,
        prenom: model.prenom,
        email: model.email,
        mot_de_passe: model.mot_de_passe,
        role: Role::from(model.role.as_str()),
    }
}

#[async_trait]
impl UtilisateurRepository for SeaOrmUtilisateurRepository {
    async fn create(&self, u: NewUtilisateur) -> DomainResult<Utilisateur> {
        let model = utilisateur::ActiveModel {
            id: NotSet,
            nom: Set(u.nom),
            prenom: Set(u.prenom),
            email: Set(u.email),
            mot_de_passe: Set(u.mot_de_passe),
            role: Set(u.role.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        info!(id = model.id, email = %model.email, role = %model.role, "Utilisateur created");
        Ok(from_model(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Utilisateur>> {
        let models = utilisateur::Entity::find()
            .order_by_asc(utilisateur::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Utilisateur>> {
        let model = utilisateur::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Utilisateur>> {
        let model = utilisateur::Entity::find()
            .filter(utilisateur::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(from_model))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count = utilisateur::Entity::find()
            .filter(utilisateur::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        utilisateur::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn update(&self, u: Utilisateur) -> DomainResult<Utilisateur> {
        debug!(id = u.id, "Updating utilisateur");

        if self.find_by_id(u.id).await?.is_none() {
            return Err(DomainError::not_found("Utilisateur", u.id));
        }

        let model = utilisateur::ActiveModel {
            id: Set(u.id),
            nom: Set(u.nom),
            prenom: Set(u.prenom),
            email: Set(u.email),
            mot_de_passe: Set(u.mot_de_passe),
            role: Set(u.role.to_string()),
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;
        Ok(from_model(model))
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> DomainResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Utilisateur", id));
        }

        utilisateur::ActiveModel {
            id: Set(id),
            mot_de_passe: Set(password_hash.to_string()),
            nom: NotSet,
            prenom: NotSet,
            email: NotSet,
            role: NotSet,
        }
        .update(&self.db)
        .await
        .map_err(db_err)?;

        info!(id, "Password updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        // assigned taches are detached by the foreign key
        let result = utilisateur::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Utilisateur", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::tache_repository::SeaOrmTacheRepository;
    use super::super::test_support::test_db;
    use super::*;
    use crate::domain::tache::{NewTache, TacheRepository};

    fn user(email: &str) -> NewUtilisateur {
        NewUtilisateur {
            nom: "Chakir".into(),
            prenom: "Fatima".into(),
            email: email.into(),
            mot_de_passe: "$2b$04$hash".into(),
            role: Role::Equipier,
        }
    }

    #[tokio::test]
    async fn email_lookup_and_uniqueness() {
        let repo = SeaOrmUtilisateurRepository::new(test_db().await);
        let created = repo.create(user("fatima.chakir@emi.ac.ma")).await.unwrap();

        let found = repo
            .find_by_email("fatima.chakir@emi.ac.ma")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.role, Role::Equipier);
        assert!(repo.exists_by_email("fatima.chakir@emi.ac.ma").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        assert!(matches!(
            repo.create(user("fatima.chakir@emi.ac.ma")).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn password_update_touches_only_the_hash() {
        let repo = SeaOrmUtilisateurRepository::new(test_db().await);
        let created = repo.create(user("omar.idrissi@emi.ac.ma")).await.unwrap();

        repo.update_password(created.id, "$2b$04$other").await.unwrap();

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.mot_de_passe, "$2b$04$other");
        assert_eq!(stored.email, created.email);
        assert_eq!(stored.nom, created.nom);
    }

    #[tokio::test]
    async fn deleting_a_user_detaches_their_tasks() {
        let db = test_db().await;
        let repo = SeaOrmUtilisateurRepository::new(db.clone());
        let taches = SeaOrmTacheRepository::new(db);

        let u = repo.create(user("ahmed.bennani@emi.ac.ma")).await.unwrap();
        let t = taches
            .create(NewTache {
                description: "Installer les badges".into(),
                statut: Default::default(),
                date_limite: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                priorite: Default::default(),
                responsable_id: Some(u.id),
            })
            .await
            .unwrap();

        repo.delete(u.id).await.unwrap();

        let stored = taches.find_by_id(t.id).await.unwrap().unwrap();
        assert_eq!(stored.responsable_id, None);
    }
}
