//! Utilisateur domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    /// Logistics team member
    #[default]
    Equipier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Equipier => "EQUIPIER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ADMIN" => Self::Admin,
            _ => Self::Equipier,
        }
    }
}

/// Stored account. `mot_de_passe` always holds a bcrypt hash.
#[derive(Debug, Clone)]
pub struct Utilisateur {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: Role,
}

/// Account to insert; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUtilisateur {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("EQUIPIER"), Role::Equipier);
        assert_eq!(Role::from("unknown"), Role::Equipier);
    }

    #[test]
    fn role_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"EQUIPIER\"").unwrap(),
            Role::Equipier
        );
    }
}
