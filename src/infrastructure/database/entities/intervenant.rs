//! Intervenant entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "intervenants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub biographie: Option<String>,
    pub specialite: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entreprise::Entity",
        from = "Column::EntrepriseId",
        to = "super::entreprise::Column::Id",
        on_delete = "Cascade"
    )]
    Entreprise,
    #[sea_orm(has_many = "super::conference_intervenant::Entity")]
    ConferenceIntervenants,
}

impl Related<super::entreprise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entreprise.def()
    }
}

impl Related<super::conference::Entity> for Entity {
    fn to() -> RelationDef {
        super::conference_intervenant::Relation::Conference.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::conference_intervenant::Relation::Intervenant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
