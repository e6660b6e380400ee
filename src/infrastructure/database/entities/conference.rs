//! Conference entity for database

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titre: String,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
    pub salle_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salle::Entity",
        from = "Column::SalleId",
        to = "super::salle::Column::Id",
        on_delete = "SetNull"
    )]
    Salle,
    #[sea_orm(has_many = "super::conference_intervenant::Entity")]
    ConferenceIntervenants,
}

impl Related<super::salle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salle.def()
    }
}

impl Related<super::intervenant::Entity> for Entity {
    fn to() -> RelationDef {
        super::conference_intervenant::Relation::Intervenant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::conference_intervenant::Relation::Conference.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
