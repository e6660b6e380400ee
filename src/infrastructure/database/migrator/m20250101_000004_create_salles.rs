//! Migration to create salles table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Salles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Salles::Numero).integer().not_null().unique_key())
                    .col(ColumnDef::new(Salles::Capacite).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Salles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Salles {
    Table,
    Id,
    Numero,
    Capacite,
}
