//! Lancamento domain models.
//!
//! A lancamento is a single ledger entry: either a payment that happened or a
//! scheduled commitment, linked optionally to a categoria, despesa, fonte de
//! renda, and conta.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoLancamento {
    #[default]
    Despesa,
    Receita,
}

impl TipoLancamento {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoLancamento::Despesa => "DESPESA",
            TipoLancamento::Receita => "RECEITA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DESPESA" => Some(TipoLancamento::Despesa),
            "RECEITA" => Some(TipoLancamento::Receita),
            _ => None,
        }
    }
}

/// Stored lifecycle status of a ledger entry.
///
/// `Atrasado` can also be a *projected* view status for pending entries past
/// their due date; the stored row only changes through updates or payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusLancamento {
    #[default]
    Pendente,
    Pago,
    Atrasado,
}

impl StatusLancamento {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLancamento::Pendente => "PENDENTE",
            StatusLancamento::Pago => "PAGO",
            StatusLancamento::Atrasado => "ATRASADO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDENTE" => Some(StatusLancamento::Pendente),
            "PAGO" => Some(StatusLancamento::Pago),
            "ATRASADO" => Some(StatusLancamento::Atrasado),
            _ => None,
        }
    }
}

/// Domain model representing a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lancamento {
    pub id: String,
    pub user_id: String,
    pub tipo: TipoLancamento,
    pub categoria_id: Option<String>,
    pub despesa_id: Option<String>,
    pub fonte_renda_id: Option<String>,
    pub conta_id: Option<String>,
    pub descricao: String,
    pub valor: Decimal,
    pub valor_pago: Option<Decimal>,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: StatusLancamento,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_campos(descricao: &str, valor: Decimal) -> Result<()> {
    if descricao.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "descricao".to_string(),
        )));
    }
    if valor <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "valor must be positive".to_string(),
        )));
    }
    Ok(())
}

/// Input model for creating a new lancamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLancamento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tipo: TipoLancamento,
    pub categoria_id: Option<String>,
    pub despesa_id: Option<String>,
    pub fonte_renda_id: Option<String>,
    pub conta_id: Option<String>,
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    #[serde(default)]
    pub status: StatusLancamento,
}

impl NewLancamento {
    pub fn validate(&self) -> Result<()> {
        validate_campos(&self.descricao, self.valor)
    }
}

/// Input model for updating an existing lancamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LancamentoUpdate {
    pub id: Option<String>,
    pub tipo: TipoLancamento,
    pub categoria_id: Option<String>,
    pub despesa_id: Option<String>,
    pub fonte_renda_id: Option<String>,
    pub conta_id: Option<String>,
    pub descricao: String,
    pub valor: Decimal,
    pub valor_pago: Option<Decimal>,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: StatusLancamento,
}

impl LancamentoUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Lancamento ID is required for updates".to_string(),
            )));
        }
        validate_campos(&self.descricao, self.valor)?;
        if let Some(pago) = self.valor_pago {
            if pago <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "valorPago must be positive".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for marking a lancamento as paid.
///
/// Missing fields default to the entry's own `valor` and to the current date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoLancamento {
    pub valor_pago: Option<Decimal>,
    pub data_pagamento: Option<NaiveDate>,
}

impl PagamentoLancamento {
    pub fn validate(&self) -> Result<()> {
        if let Some(pago) = self.valor_pago {
            if pago <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "valorPago must be positive".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Filters for listing lancamentos. All fields are optional and combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LancamentoFilter {
    /// Calendar year of `data_vencimento`.
    pub ano: Option<i32>,
    /// Calendar month (1..=12) of `data_vencimento`.
    pub mes: Option<u32>,
    pub conta_id: Option<String>,
    pub categoria_id: Option<String>,
    pub status: Option<StatusLancamento>,
    pub tipo: Option<TipoLancamento>,
}
