//! Despesa domain models.
//!
//! A despesa is a recurring or one-off expense definition: what is expected
//! to be paid, for how much, and on which day of the month.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DIA_MAX, DIA_MIN};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an expense definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Despesa {
    pub id: String,
    pub user_id: String,
    pub categoria_id: String,
    pub nome: String,
    pub valor_estimado: Decimal,
    /// Day of month the despesa is due (1..=31).
    pub dia_vencimento: u32,
    /// Whether the despesa recurs every month.
    pub mensal: bool,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new despesa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDespesa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub categoria_id: String,
    pub nome: String,
    pub valor_estimado: Decimal,
    pub dia_vencimento: u32,
    #[serde(default)]
    pub mensal: bool,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

fn validate_campos(nome: &str, valor_estimado: Decimal, dia_vencimento: u32) -> Result<()> {
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
    if !(DIA_MIN..=DIA_MAX).contains(&dia_vencimento) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "diaVencimento must be between {} and {}",
            DIA_MIN, DIA_MAX
        ))));
    }
    Ok(())
}

impl NewDespesa {
    pub fn validate(&self) -> Result<()> {
        if self.categoria_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "categoriaId".to_string(),
            )));
        }
        validate_campos(&self.nome, self.valor_estimado, self.dia_vencimento)
    }
}

/// Input model for updating an existing despesa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DespesaUpdate {
    pub id: Option<String>,
    pub categoria_id: String,
    pub nome: String,
    pub valor_estimado: Decimal,
    pub dia_vencimento: u32,
    pub mensal: bool,
    pub ativo: bool,
}

impl DespesaUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Despesa ID is required for updates".to_string(),
            )));
        }
        if self.categoria_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "categoriaId".to_string(),
            )));
        }
        validate_campos(&self.nome, self.valor_estimado, self.dia_vencimento)
    }
}
