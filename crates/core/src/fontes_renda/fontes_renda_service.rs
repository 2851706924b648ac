use std::sync::Arc;

use async_trait::async_trait;

use super::fontes_renda_model::{FonteRenda, FonteRendaUpdate, NewFonteRenda};
use super::fontes_renda_traits::{FonteRendaRepositoryTrait, FonteRendaServiceTrait};
use crate::errors::Result;

/// Service for managing fontes de renda.
pub struct FonteRendaService {
    repository: Arc<dyn FonteRendaRepositoryTrait>,
}

impl FonteRendaService {
    pub fn new(repository: Arc<dyn FonteRendaRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FonteRendaServiceTrait for FonteRendaService {
    async fn create_fonte_renda(
        &self,
        user_id: &str,
        new_fonte: NewFonteRenda,
    ) -> Result<FonteRenda> {
        new_fonte.validate()?;
        self.repository.create(user_id, new_fonte).await
    }

    async fn update_fonte_renda(
        &self,
        user_id: &str,
        update: FonteRendaUpdate,
    ) -> Result<FonteRenda> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_fonte_renda(&self, user_id: &str, fonte_id: &str) -> Result<()> {
        self.repository.delete(user_id, fonte_id).await?;
        Ok(())
    }

    fn get_fonte_renda(&self, user_id: &str, fonte_id: &str) -> Result<FonteRenda> {
        self.repository.get_by_id(user_id, fonte_id)
    }

    fn list_fontes_renda(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
    ) -> Result<Vec<FonteRenda>> {
        self.repository.list(user_id, ativo_filter)
    }
}
