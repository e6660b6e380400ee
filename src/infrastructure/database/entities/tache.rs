//! Tache entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "taches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// EN_ATTENTE, EN_COURS or TERMINEE
    pub statut: String,
    pub date_limite: NaiveDate,
    /// LOW, MEDIUM or HIGH
    pub priorite: String,
    pub responsable_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::ResponsableId",
        to = "super::utilisateur::Column::Id",
        on_delete = "SetNull"
    )]
    Responsable,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responsable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
