use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::despesas_model::{Despesa, DespesaUpdate, NewDespesa};
use super::despesas_traits::{DespesaRepositoryTrait, DespesaServiceTrait};
use crate::categorias::CategoriaRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// Service for managing despesas.
///
/// Holds the categoria repository to confirm the parent categoria exists
/// before delegating to the despesa repository.
pub struct DespesaService {
    repository: Arc<dyn DespesaRepositoryTrait>,
    categoria_repository: Arc<dyn CategoriaRepositoryTrait>,
}

impl DespesaService {
    pub fn new(
        repository: Arc<dyn DespesaRepositoryTrait>,
        categoria_repository: Arc<dyn CategoriaRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            categoria_repository,
        }
    }

    fn check_categoria(&self, user_id: &str, categoria_id: &str) -> Result<()> {
        match self.categoria_repository.get_by_id(user_id, categoria_id) {
            Ok(_) => Ok(()),
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Categoria '{}' not found",
                    categoria_id
                ))))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl DespesaServiceTrait for DespesaService {
    async fn create_despesa(&self, user_id: &str, new_despesa: NewDespesa) -> Result<Despesa> {
        new_despesa.validate()?;
        self.check_categoria(user_id, &new_despesa.categoria_id)?;
        debug!("Creating despesa '{}' for {}", new_despesa.nome, user_id);
        self.repository.create(user_id, new_despesa).await
    }

    async fn update_despesa(&self, user_id: &str, update: DespesaUpdate) -> Result<Despesa> {
        update.validate()?;
        self.check_categoria(user_id, &update.categoria_id)?;
        self.repository.update(user_id, update).await
    }

    async fn delete_despesa(&self, user_id: &str, despesa_id: &str) -> Result<()> {
        self.repository.delete(user_id, despesa_id).await?;
        Ok(())
    }

    fn get_despesa(&self, user_id: &str, despesa_id: &str) -> Result<Despesa> {
        self.repository.get_by_id(user_id, despesa_id)
    }

    fn list_despesas(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
        categoria_id: Option<&str>,
    ) -> Result<Vec<Despesa>> {
        self.repository.list(user_id, ativo_filter, categoria_id)
    }
}
