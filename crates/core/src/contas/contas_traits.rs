//! Conta repository and service traits.

use async_trait::async_trait;

use super::contas_model::{Conta, ContaUpdate, NewConta};
use crate::errors::Result;

/// Contract for Conta persistence. All operations are user-scoped.
#[async_trait]
pub trait ContaRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_conta: NewConta) -> Result<Conta>;

    async fn update(&self, user_id: &str, update: ContaUpdate) -> Result<Conta>;

    /// Soft-deletes a conta. Returns the number of affected rows.
    async fn delete(&self, user_id: &str, conta_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, conta_id: &str) -> Result<Conta>;

    fn list(&self, user_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Conta>>;
}

/// Contract for Conta business operations.
#[async_trait]
pub trait ContaServiceTrait: Send + Sync {
    async fn create_conta(&self, user_id: &str, new_conta: NewConta) -> Result<Conta>;

    async fn update_conta(&self, user_id: &str, update: ContaUpdate) -> Result<Conta>;

    async fn delete_conta(&self, user_id: &str, conta_id: &str) -> Result<()>;

    fn get_conta(&self, user_id: &str, conta_id: &str) -> Result<Conta>;

    fn list_contas(&self, user_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Conta>>;
}
