//! Migration to create partenaires table

use sea_orm_migration::prelude::*;

use super::m20250101_000006_create_evenements::Evenements;
use super::m20250101_000007_create_contrats::Contrats;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partenaires::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Partenaires::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Partenaires::Nom).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Partenaires::ContratId)
                            .string_len(64)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Partenaires::EvenementId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partenaires_contrat")
                            .from(Partenaires::Table, Partenaires::ContratId)
                            .to(Contrats::Table, Contrats::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partenaires_evenement")
                            .from(Partenaires::Table, Partenaires::EvenementId)
                            .to(Evenements::Table, Evenements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partenaires::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Partenaires {
    Table,
    Id,
    Nom,
    ContratId,
    EvenementId,
}
