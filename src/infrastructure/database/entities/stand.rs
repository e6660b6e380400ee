//! Stand entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub numero: i32,
    /// LIBRE, OCCUPE or RESERVE
    pub statut: String,
    /// SMALL, MEDIUM or LARGE
    pub taille: String,
    pub zone: Option<String>,
    /// One stand per company
    #[sea_orm(unique)]
    pub entreprise_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entreprise::Entity",
        from = "Column::EntrepriseId",
        to = "super::entreprise::Column::Id",
        on_delete = "SetNull"
    )]
    Entreprise,
}

impl Related<super::entreprise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entreprise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
