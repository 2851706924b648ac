//! Usuario domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Canonical form of an email address: trimmed and lowercased. Applied both
/// when storing and when looking up, so case/whitespace differences at login
/// cannot miss a registered user.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Domain model representing an application user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: String,
    pub nome: String,
    pub email: String,
    /// Argon2 hash of the user's password. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new user.
///
/// The plaintext password never reaches this crate; the caller hashes it and
/// passes the hash alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUsuario {
    pub nome: String,
    pub email: String,
}

impl NewUsuario {
    pub fn validate(&self) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nome".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "email must be a valid address".to_string(),
            )));
        }
        Ok(())
    }
}
