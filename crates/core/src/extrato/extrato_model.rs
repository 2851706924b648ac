//! View models for the statement (extrato) and reports.
//!
//! These are computed per request from the user's lancamentos; nothing here
//! is stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lancamentos::{Lancamento, StatusLancamento};

/// A lancamento as it appears in the extrato: the stored entry plus
/// view-only fields derived from a reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LancamentoExtrato {
    #[serde(flatten)]
    pub lancamento: Lancamento,
    /// Signed days from the reference date to `data_vencimento`.
    /// Negative once the due date has passed.
    pub dias_ate_vencimento: i64,
    /// `ATRASADO` for pending entries past due; otherwise the stored status.
    pub status_projetado: StatusLancamento,
}

/// One calendar month of the statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtratoMensal {
    pub ano: i32,
    pub mes: u32,
    pub total: Decimal,
    pub total_pago: Decimal,
    pub total_pendente: Decimal,
    pub lancamentos: Vec<LancamentoExtrato>,
}

/// Totals for one categoria.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumoCategoria {
    pub categoria_id: Option<String>,
    pub total: Decimal,
    pub total_pago: Decimal,
    pub quantidade: usize,
}

/// Totals for one conta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumoConta {
    pub conta_id: Option<String>,
    pub total: Decimal,
    pub total_pago: Decimal,
    pub quantidade: usize,
}

/// Receitas vs despesas totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumoMensal {
    pub ano: i32,
    pub mes: u32,
    pub total_receitas: Decimal,
    pub total_despesas: Decimal,
    pub saldo: Decimal,
}
