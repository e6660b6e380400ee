//! Entreprise entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entreprises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nom: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::stand::Entity")]
    Stand,
    #[sea_orm(has_many = "super::intervenant::Entity")]
    Intervenants,
}

impl Related<super::stand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stand.def()
    }
}

impl Related<super::intervenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intervenants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
