//! Contrat entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contrats")]
pub struct Model {
    /// Caller-supplied identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Double")]
    pub montant: f64,
    /// SILVER, GOLD or DIAMOND
    #[sea_orm(column_name = "type")]
    pub type_contrat: String,
    pub date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::partenaire::Entity")]
    Partenaire,
}

impl Related<super::partenaire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Partenaire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
