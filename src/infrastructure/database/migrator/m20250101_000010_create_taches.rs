//! Migration to create taches table

use sea_orm_migration::prelude::*;

use super::m20250101_000009_create_utilisateurs::Utilisateurs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Taches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Taches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Taches::Description).text().not_null())
                    .col(
                        ColumnDef::new(Taches::Statut)
                            .string_len(20)
                            .not_null()
                            .default("EN_ATTENTE"),
                    )
                    .col(ColumnDef::new(Taches::DateLimite).date().not_null())
                    .col(
                        ColumnDef::new(Taches::Priorite)
                            .string_len(20)
                            .not_null()
                            .default("MEDIUM"),
                    )
                    .col(ColumnDef::new(Taches::ResponsableId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_taches_responsable")
                            .from(Taches::Table, Taches::ResponsableId)
                            .to(Utilisateurs::Table, Utilisateurs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_taches_responsable")
                    .table(Taches::Table)
                    .col(Taches::ResponsableId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Taches::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Taches {
    Table,
    Id,
    Description,
    Statut,
    DateLimite,
    Priorite,
    ResponsableId,
}
