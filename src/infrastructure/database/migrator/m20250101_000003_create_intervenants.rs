//! Migration to create intervenants table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_entreprises::Entreprises;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Intervenants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Intervenants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Intervenants::Nom).string_len(100).not_null())
                    .col(ColumnDef::new(Intervenants::Biographie).text().null())
                    .col(ColumnDef::new(Intervenants::Specialite).string_len(100).null())
                    .col(ColumnDef::new(Intervenants::Email).string_len(100).null())
                    .col(ColumnDef::new(Intervenants::Telephone).string_len(20).null())
                    .col(ColumnDef::new(Intervenants::EntrepriseId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_intervenants_entreprise")
                            .from(Intervenants::Table, Intervenants::EntrepriseId)
                            .to(Entreprises::Table, Entreprises::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Intervenants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Intervenants {
    Table,
    Id,
    Nom,
    Biographie,
    Specialite,
    Email,
    Telephone,
    EntrepriseId,
}
