use std::sync::Arc;

use async_trait::async_trait;

use super::contas_model::{Conta, ContaUpdate, NewConta};
use super::contas_traits::{ContaRepositoryTrait, ContaServiceTrait};
use crate::errors::Result;

/// Service for managing contas.
pub struct ContaService {
    repository: Arc<dyn ContaRepositoryTrait>,
}

impl ContaService {
    pub fn new(repository: Arc<dyn ContaRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContaServiceTrait for ContaService {
    async fn create_conta(&self, user_id: &str, new_conta: NewConta) -> Result<Conta> {
        new_conta.validate()?;
        self.repository.create(user_id, new_conta).await
    }

    async fn update_conta(&self, user_id: &str, update: ContaUpdate) -> Result<Conta> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_conta(&self, user_id: &str, conta_id: &str) -> Result<()> {
        self.repository.delete(user_id, conta_id).await?;
        Ok(())
    }

    fn get_conta(&self, user_id: &str, conta_id: &str) -> Result<Conta> {
        self.repository.get_by_id(user_id, conta_id)
    }

    fn list_contas(&self, user_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Conta>> {
        self.repository.list(user_id, ativo_filter)
    }
}
