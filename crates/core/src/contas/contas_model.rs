//! Conta domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a financial account record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conta {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    /// Free-form account kind label, e.g. CORRENTE, POUPANCA, CARTEIRA.
    pub tipo_conta: Option<String>,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new conta.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub tipo_conta: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl NewConta {
    pub fn validate(&self) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nome".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing conta.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContaUpdate {
    pub id: Option<String>,
    pub nome: String,
    pub tipo_conta: Option<String>,
    pub ativo: bool,
}

impl ContaUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Conta ID is required for updates".to_string(),
            )));
        }
        if self.nome.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nome".to_string(),
            )));
        }
        Ok(())
    }
}
