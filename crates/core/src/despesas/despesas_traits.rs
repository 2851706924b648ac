//! Despesa repository and service traits.

use async_trait::async_trait;

use super::despesas_model::{Despesa, DespesaUpdate, NewDespesa};
use crate::errors::Result;

/// Contract for Despesa persistence. All operations are user-scoped.
#[async_trait]
pub trait DespesaRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_despesa: NewDespesa) -> Result<Despesa>;

    async fn update(&self, user_id: &str, update: DespesaUpdate) -> Result<Despesa>;

    /// Soft-deletes a despesa. Returns the number of affected rows.
    async fn delete(&self, user_id: &str, despesa_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, despesa_id: &str) -> Result<Despesa>;

    /// Lists the user's despesas, optionally filtered by active status and categoria.
    fn list(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
        categoria_id: Option<&str>,
    ) -> Result<Vec<Despesa>>;
}

/// Contract for Despesa business operations.
#[async_trait]
pub trait DespesaServiceTrait: Send + Sync {
    /// Creates a despesa after confirming the referenced categoria exists.
    async fn create_despesa(&self, user_id: &str, new_despesa: NewDespesa) -> Result<Despesa>;

    async fn update_despesa(&self, user_id: &str, update: DespesaUpdate) -> Result<Despesa>;

    async fn delete_despesa(&self, user_id: &str, despesa_id: &str) -> Result<()>;

    fn get_despesa(&self, user_id: &str, despesa_id: &str) -> Result<Despesa>;

    fn list_despesas(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
        categoria_id: Option<&str>,
    ) -> Result<Vec<Despesa>>;
}
