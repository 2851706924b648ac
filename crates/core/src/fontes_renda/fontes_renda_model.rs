//! FonteRenda domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DIA_MAX, DIA_MIN};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an income source definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FonteRenda {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    pub valor_estimado: Decimal,
    /// Day of month the income is expected (1..=31).
    pub dia_recebimento: u32,
    pub mensal: bool,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new fonte de renda.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFonteRenda {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub valor_estimado: Decimal,
    pub dia_recebimento: u32,
    #[serde(default)]
    pub mensal: bool,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

fn validate_campos(nome: &str, valor_estimado: Decimal, dia_recebimento: u32) -> Result<()> {
    if nome.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "nome".to_string(),
        )));
    }
    if valor_estimado <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "valorEstimado must be positive".to_string(),
        )));
    }
    if !(DIA_MIN..=DIA_MAX).contains(&dia_recebimento) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "diaRecebimento must be between {} and {}",
            DIA_MIN, DIA_MAX
        ))));
    }
    Ok(())
}

impl NewFonteRenda {
    pub fn validate(&self) -> Result<()> {
        validate_campos(&self.nome, self.valor_estimado, self.dia_recebimento)
    }
}

/// Input model for updating an existing fonte de renda.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FonteRendaUpdate {
    pub id: Option<String>,
    pub nome: String,
    pub valor_estimado: Decimal,
    pub dia_recebimento: u32,
    pub mensal: bool,
    pub ativo: bool,
}

impl FonteRendaUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "FonteRenda ID is required for updates".to_string(),
            )));
        }
        validate_campos(&self.nome, self.valor_estimado, self.dia_recebimento)
    }
}
