//! Migration to create conferences and their speaker join table

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_intervenants::Intervenants;
use super::m20250101_000004_create_salles::Salles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conferences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conferences::Titre).string_len(200).not_null())
                    .col(ColumnDef::new(Conferences::DateDebut).date_time().not_null())
                    .col(ColumnDef::new(Conferences::DateFin).date_time().not_null())
                    .col(ColumnDef::new(Conferences::SalleId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conferences_salle")
                            .from(Conferences::Table, Conferences::SalleId)
                            .to(Salles::Table, Salles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ConferenceIntervenants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConferenceIntervenants::ConferenceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConferenceIntervenants::IntervenantId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ConferenceIntervenants::ConferenceId)
                            .col(ConferenceIntervenants::IntervenantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conference_intervenants_conference")
                            .from(
                                ConferenceIntervenants::Table,
                                ConferenceIntervenants::ConferenceId,
                            )
                            .to(Conferences::Table, Conferences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conference_intervenants_intervenant")
                            .from(
                                ConferenceIntervenants::Table,
                                ConferenceIntervenants::IntervenantId,
                            )
                            .to(Intervenants::Table, Intervenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConferenceIntervenants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conferences::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Conferences {
    Table,
    Id,
    Titre,
    DateDebut,
    DateFin,
    SalleId,
}

#[derive(Iden)]
enum ConferenceIntervenants {
    Table,
    ConferenceId,
    IntervenantId,
}
