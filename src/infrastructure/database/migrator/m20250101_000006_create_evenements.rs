//! Migration to create evenements table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Evenements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evenements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evenements::Nom).string_len(200).not_null())
                    .col(ColumnDef::new(Evenements::DateDebut).date().not_null())
                    .col(ColumnDef::new(Evenements::DateFin).date().not_null())
                    .col(ColumnDef::new(Evenements::Lieu).string_len(255).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evenements::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Evenements {
    Table,
    Id,
    Nom,
    DateDebut,
    DateFin,
    Lieu,
}
