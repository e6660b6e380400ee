//! Conference to Intervenant join table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conference_intervenants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conference_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub intervenant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conference::Entity",
        from = "Column::ConferenceId",
        to = "super::conference::Column::Id",
        on_delete = "Cascade"
    )]
    Conference,
    #[sea_orm(
        belongs_to = "super::intervenant::Entity",
        from = "Column::IntervenantId",
        to = "super::intervenant::Column::Id",
        on_delete = "Cascade"
    )]
    Intervenant,
}

impl Related<super::conference::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conference.def()
    }
}

impl Related<super::intervenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intervenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
