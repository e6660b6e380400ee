//! Partenaire entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partenaires")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    /// One contract per partner
    #[sea_orm(unique)]
    pub contrat_id: Option<String>,
    pub evenement_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contrat::Entity",
        from = "Column::ContratId",
        to = "super::contrat::Column::Id",
        on_delete = "SetNull"
    )]
    Contrat,
    #[sea_orm(
        belongs_to = "super::evenement::Entity",
        from = "Column::EvenementId",
        to = "super::evenement::Column::Id",
        on_delete = "Cascade"
    )]
    Evenement,
}

impl Related<super::contrat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrat.def()
    }
}

impl Related<super::evenement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evenement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
