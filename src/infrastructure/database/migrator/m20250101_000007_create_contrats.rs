//! Migration to create contrats table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contrats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contrats::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contrats::Montant).double().not_null())
                    .col(ColumnDef::new(Contrats::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Contrats::Date).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contrats::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Contrats {
    Table,
    Id,
    Montant,
    Type,
    Date,
}
