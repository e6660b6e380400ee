//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_entreprises;
mod m20250101_000002_create_stands;
mod m20250101_000003_create_intervenants;
mod m20250101_000004_create_salles;
mod m20250101_000005_create_conferences;
mod m20250101_000006_create_evenements;
mod m20250101_000007_create_contrats;
mod m20250101_000008_create_partenaires;
mod m20250101_000009_create_utilisateurs;
mod m20250101_000010_create_taches;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_entreprises::Migration),
            Box::new(m20250101_000002_create_stands::Migration),
            Box::new(m20250101_000003_create_intervenants::Migration),
            Box::new(m20250101_000004_create_salles::Migration),
            Box::new(m20250101_000005_create_conferences::Migration),
            Box::new(m20250101_000006_create_evenements::Migration),
            Box::new(m20250101_000007_create_contrats::Migration),
            Box::new(m20250101_000008_create_partenaires::Migration),
            Box::new(m20250101_000009_create_utilisateurs::Migration),
            Box::new(m20250101_000010_create_taches::Migration),
        ]
    }
}
