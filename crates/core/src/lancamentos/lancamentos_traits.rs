//! Lancamento repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::lancamentos_model::{
    Lancamento, LancamentoFilter, LancamentoUpdate, NewLancamento, PagamentoLancamento,
};
use crate::errors::Result;

/// Contract for Lancamento persistence. All operations are user-scoped.
#[async_trait]
pub trait LancamentoRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_lancamento: NewLancamento) -> Result<Lancamento>;

    async fn update(&self, user_id: &str, update: LancamentoUpdate) -> Result<Lancamento>;

    /// Soft-deletes a lancamento. Returns the number of affected rows.
    async fn delete(&self, user_id: &str, lancamento_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, lancamento_id: &str) -> Result<Lancamento>;

    /// Lists the user's lancamentos matching the filter, ordered by due date.
    fn list(&self, user_id: &str, filter: &LancamentoFilter) -> Result<Vec<Lancamento>>;
}

/// Contract for Lancamento business operations.
#[async_trait]
pub trait LancamentoServiceTrait: Send + Sync {
    /// Creates a lancamento after confirming every referenced entity exists.
    async fn create_lancamento(
        &self,
        user_id: &str,
        new_lancamento: NewLancamento,
    ) -> Result<Lancamento>;

    /// Updates a lancamento. Moving into `PAGO` through a plain update fills
    /// the payment fields, defaulting `valor_pago` to `valor` and
    /// `data_pagamento` to `hoje`.
    async fn update_lancamento(
        &self,
        user_id: &str,
        update: LancamentoUpdate,
        hoje: NaiveDate,
    ) -> Result<Lancamento>;

    async fn delete_lancamento(&self, user_id: &str, lancamento_id: &str) -> Result<()>;

    fn get_lancamento(&self, user_id: &str, lancamento_id: &str) -> Result<Lancamento>;

    fn list_lancamentos(
        &self,
        user_id: &str,
        filter: &LancamentoFilter,
    ) -> Result<Vec<Lancamento>>;

    /// Marks a lancamento as paid, defaulting `valor_pago` to the entry's
    /// `valor` and `data_pagamento` to `hoje` when not supplied.
    async fn pagar_lancamento(
        &self,
        user_id: &str,
        lancamento_id: &str,
        pagamento: PagamentoLancamento,
        hoje: NaiveDate,
    ) -> Result<Lancamento>;
}
