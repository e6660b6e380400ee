//! Startup data seeding
//!
//! Populates an empty store with the administrator, the logistics team
//! and the two conference rooms. Each table is seeded only when empty,
//! so running the seeder again is a no-op.

use std::sync::Arc;

use tracing::info;

use super::identity::AuthService;
use crate::config::AdminConfig;
use crate::domain::utilisateur::{NewUtilisateur, Role};
use crate::domain::{DomainResult, RepositoryProvider};

/// (nom, prenom, email, password) of the seeded logistics team
const EQUIPIERS: [(&str, &str, &str, &str); 4] = [
    ("Alami", "Sara", "sara.alami@emi.ac.ma", "sara123"),
    ("Bennani", "Ahmed", "ahmed.bennani@emi.ac.ma", "ahmed123"),
    ("Chakir", "Fatima", "fatima.chakir@emi.ac.ma", "fatima123"),
    ("Idrissi", "Omar", "omar.idrissi@emi.ac.ma", "omar123"),
];

/// (numero, capacite)
const SALLES: [(i32, i32); 2] = [(1, 480), (2, 220)];

/// Rows inserted by one seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub utilisateurs: usize,
    pub salles: usize,
}

pub struct DataSeeder {
    repos: Arc<dyn RepositoryProvider>,
    auth: Arc<AuthService>,
    admin: AdminConfig,
}

impl DataSeeder {
    pub fn new(repos: Arc<dyn RepositoryProvider>, auth: Arc<AuthService>, admin: AdminConfig) -> Self {
        Self { repos, auth, admin }
    }

    pub async fn run(&self) -> DomainResult<SeedReport> {
        let report = SeedReport {
            utilisateurs: self.seed_utilisateurs().await?,
            salles: self.seed_salles().await?,
        };
        info!(
            utilisateurs = report.utilisateurs,
            salles = report.salles,
            "Seeding finished"
        );
        Ok(report)
    }

    async fn seed_utilisateurs(&self) -> DomainResult<usize> {
        if self.repos.utilisateurs().count().await? > 0 {
            return Ok(0);
        }

        let admin = NewUtilisateur {
            nom: "Admin".into(),
            prenom: "Forum EMI".into(),
            email: self.admin.email.clone(),
            mot_de_passe: self.admin.password.clone(),
            role: Role::Admin,
        };
        self.insert(admin).await?;
        info!(email = %self.admin.email, "Default admin created, change its password");

        for (nom, prenom, email, password) in EQUIPIERS {
            self.insert(NewUtilisateur {
                nom: nom.into(),
                prenom: prenom.into(),
                email: email.into(),
                mot_de_passe: password.into(),
                role: Role::Equipier,
            })
            .await?;
        }

        Ok(1 + EQUIPIERS.len())
    }

    async fn insert(&self, mut utilisateur: NewUtilisateur) -> DomainResult<()> {
        utilisateur.mot_de_passe = self.auth.hash(&utilisateur.mot_de_passe)?;
        self.repos.utilisateurs().create(utilisateur).await?;
        Ok(())
    }

    async fn seed_salles(&self) -> DomainResult<usize> {
        if self.repos.salles().count().await? > 0 {
            return Ok(0);
        }

        for (numero, capacite) in SALLES {
            self.repos.salles().create(numero, capacite).await?;
        }
        Ok(SALLES.len())
    }
}
