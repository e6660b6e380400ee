//! Evenement entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evenements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub lieu: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::partenaire::Entity")]
    Partenaires,
}

impl Related<super::partenaire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Partenaires.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
