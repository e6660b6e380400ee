//! Migration to create stands table

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
                    .table(Stands::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stands::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stands::Numero).integer().not_null().unique_key())
                    .col(
                        ColumnDef::new(Stands::Statut)
                            .string_len(20)
                            .not_null()
                            .default("LIBRE"),
                    )
                    .col(
                        ColumnDef::new(Stands::Taille)
                            .string_len(20)
                            .not_null()
                            .default("MEDIUM"),
                    )
                    .col(ColumnDef::new(Stands::Zone).string_len(50).null())
                    .col(
                        ColumnDef::new(Stands::EntrepriseId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stands_entreprise")
                            .from(Stands::Table, Stands::EntrepriseId)
                            .to(Entreprises::Table, Entreprises::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stands_zone")
                    .table(Stands::Table)
                    .col(Stands::Zone)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stands::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Stands {
    Table,
    Id,
    Numero,
    Statut,
    Taille,
    Zone,
    EntrepriseId,
}
