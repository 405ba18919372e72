//! User (principal) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Account roles, matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "lecteur")]
    Reader,
    #[serde(rename = "bibliothecaire")]
    Librarian,
    #[serde(rename = "administrateur")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "lecteur",
            Role::Librarian => "bibliothecaire",
            Role::Administrator => "administrateur",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lecteur" => Ok(Role::Reader),
            "bibliothecaire" => Ok(Role::Librarian),
            "administrateur" => Ok(Role::Administrator),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Reader account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReaderStatus {
    #[serde(rename = "actif")]
    Active,
    #[serde(rename = "suspendu")]
    Suspended,
    #[serde(rename = "bloque")]
    Blocked,
}

impl ReaderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderStatus::Active => "actif",
            ReaderStatus::Suspended => "suspendu",
            ReaderStatus::Blocked => "bloque",
        }
    }
}

impl std::fmt::Display for ReaderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reader-specific profile, created at registration and never deleted
/// (status transitions only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderProfile {
    pub id: Option<i64>,
    #[serde(rename = "numero_carte")]
    pub card_number: String,
    #[serde(rename = "date_naissance")]
    pub birth_date: Option<String>,
    #[serde(rename = "statut")]
    pub status: ReaderStatus,
    #[serde(rename = "quota_emprunt")]
    pub loan_quota: i64,
    #[serde(rename = "emprunts_en_cours")]
    pub active_loans: Option<i64>,
    #[serde(rename = "penalites_impayees")]
    pub unpaid_penalties: Option<i64>,
}

/// Librarian-specific profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarianProfile {
    pub id: Option<i64>,
    #[serde(rename = "numero_employe")]
    pub employee_number: Option<String>,
    #[serde(rename = "date_embauche")]
    pub hire_date: Option<String>,
}

/// Administrator-specific profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministratorProfile {
    pub id: Option<i64>,
    #[serde(rename = "niveau_acces")]
    pub access_level: Option<String>,
}

/// Authenticated principal as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(rename = "lecteur")]
    pub reader: Option<ReaderProfile>,
    #[serde(rename = "bibliothecaire")]
    pub librarian: Option<LibrarianProfile>,
    #[serde(rename = "administrateur")]
    pub administrator: Option<AdministratorProfile>,
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Check the profile invariant: exactly one role-specific profile is
    /// populated and it matches `role`.
    pub fn validate(&self) -> ApiResult<()> {
        let populated = [
            self.reader.is_some(),
            self.librarian.is_some(),
            self.administrator.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();

        if populated != 1 {
            return Err(ApiError::MalformedEntity(format!(
                "user {} carries {} role profiles, expected exactly one",
                self.id, populated
            )));
        }

        let matches = match self.role {
            Role::Reader => self.reader.is_some(),
            Role::Librarian => self.librarian.is_some(),
            Role::Administrator => self.administrator.is_some(),
        };
        if !matches {
            return Err(ApiError::MalformedEntity(format!(
                "user {} profile does not match role '{}'",
                self.id, self.role
            )));
        }

        if let Some(reader) = &self.reader {
            if reader.loan_quota < 0 {
                return Err(ApiError::MalformedEntity(format!(
                    "user {} has negative loan quota",
                    self.id
                )));
            }
        }

        Ok(())
    }
}

/// Sign-in request payload
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "nom")]
    #[validate(length(min = 2, max = 100, message = "Last name must be 2-100 characters"))]
    pub last_name: String,
    #[serde(rename = "prenom")]
    #[validate(length(min = 2, max = 100, message = "First name must be 2-100 characters"))]
    pub first_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 8, message = "Password confirmation must be at least 8 characters"))]
    pub password_confirmation: String,
    #[serde(rename = "telephone")]
    pub phone: Option<String>,
    #[serde(rename = "date_naissance")]
    pub birth_date: String,
}

/// Update own profile request; the server's returned copy is authoritative
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(rename = "nom", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_profile() -> ReaderProfile {
        ReaderProfile {
            id: Some(7),
            card_number: "BIB-000123".to_string(),
            birth_date: Some("1990-04-12".to_string()),
            status: ReaderStatus::Active,
            loan_quota: 5,
            active_loans: Some(2),
            unpaid_penalties: Some(0),
        }
    }

    fn reader_user() -> User {
        User {
            id: 42,
            last_name: "Martin".to_string(),
            first_name: "Claire".to_string(),
            email: "claire.martin@example.org".to_string(),
            phone: None,
            role: Role::Reader,
            reader: Some(reader_profile()),
            librarian: None,
            administrator: None,
            created_at: None,
        }
    }

    #[test]
    fn reader_with_matching_profile_is_valid() {
        assert!(reader_user().validate().is_ok());
    }

    #[test]
    fn missing_profile_is_rejected() {
        let mut user = reader_user();
        user.reader = None;
        assert!(matches!(
            user.validate(),
            Err(crate::error::ApiError::MalformedEntity(_))
        ));
    }

    #[test]
    fn profile_role_mismatch_is_rejected() {
        let mut user = reader_user();
        user.role = Role::Administrator;
        assert!(user.validate().is_err());
    }

    #[test]
    fn two_profiles_are_rejected() {
        let mut user = reader_user();
        user.administrator = Some(AdministratorProfile {
            id: Some(1),
            access_level: None,
        });
        assert!(user.validate().is_err());
    }

    #[test]
    fn role_round_trips_through_wire_value() {
        let parsed: Role = "bibliothecaire".parse().unwrap();
        assert_eq!(parsed, Role::Librarian);
        assert_eq!(parsed.as_str(), "bibliothecaire");
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 42,
            "nom": "Martin",
            "prenom": "Claire",
            "email": "claire.martin@example.org",
            "telephone": "0601020304",
            "role": "lecteur",
            "lecteur": {
                "numero_carte": "BIB-000123",
                "statut": "actif",
                "quota_emprunt": 5,
                "emprunts_en_cours": 2,
                "penalites_impayees": 1
            }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Reader);
        let reader = user.reader.as_ref().unwrap();
        assert_eq!(reader.loan_quota, 5);
        assert_eq!(reader.status, ReaderStatus::Active);
        assert!(user.validate().is_ok());
    }
}
