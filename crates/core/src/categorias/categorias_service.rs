use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::categorias_model::{Categoria, CategoriaUpdate, NewCategoria};
use super::categorias_traits::{CategoriaRepositoryTrait, CategoriaServiceTrait};
use crate::errors::Result;

/// Service for managing categorias.
pub struct CategoriaService {
    repository: Arc<dyn CategoriaRepositoryTrait>,
}

impl CategoriaService {
    pub fn new(repository: Arc<dyn CategoriaRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoriaServiceTrait for CategoriaService {
    async fn create_categoria(
        &self,
        user_id: &str,
        new_categoria: NewCategoria,
    ) -> Result<Categoria> {
        new_categoria.validate()?;
        debug!("Creating categoria '{}' for {}", new_categoria.nome, user_id);
        self.repository.create(user_id, new_categoria).await
    }

    async fn update_categoria(
        &self,
        user_id: &str,
        update: CategoriaUpdate,
    ) -> Result<Categoria> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_categoria(&self, user_id: &str, categoria_id: &str) -> Result<()> {
        self.repository.delete(user_id, categoria_id).await?;
        Ok(())
    }

    fn get_categoria(&self, user_id: &str, categoria_id: &str) -> Result<Categoria> {
        self.repository.get_by_id(user_id, categoria_id)
    }

    fn list_categorias(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
    ) -> Result<Vec<Categoria>> {
        self.repository.list(user_id, ativo_filter)
    }
}
