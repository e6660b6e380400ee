//! Utilisateur entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "utilisateurs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash
    pub mot_de_passe: String,
    /// ADMIN or EQUIPIER
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tache::Entity")]
    Taches,
}

impl Related<super::tache::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
