//! Migration to create utilisateurs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utilisateurs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utilisateurs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Utilisateurs::Nom).string_len(100).not_null())
                    .col(ColumnDef::new(Utilisateurs::Prenom).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Utilisateurs::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Utilisateurs::MotDePasse).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Utilisateurs::Role)
                            .string_len(20)
                            .not_null()
                            .default("EQUIPIER"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Utilisateurs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Utilisateurs {
    Table,
    Id,
    Nom,
    Prenom,
    Email,
    MotDePasse,
    Role,
}
