//! Categoria repository and service traits.
//!
//! These traits define the contract for categoria operations without any
//! database-specific types. All operations are scoped to the owning user.

use async_trait::async_trait;

use super::categorias_model::{Categoria, CategoriaUpdate, NewCategoria};
use crate::errors::Result;

/// Contract for Categoria persistence.
#[async_trait]
pub trait CategoriaRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_categoria: NewCategoria) -> Result<Categoria>;

    async fn update(&self, user_id: &str, update: CategoriaUpdate) -> Result<Categoria>;

    /// Soft-deletes a categoria. Returns the number of affected rows.
    async fn delete(&self, user_id: &str, categoria_id: &str) -> Result<usize>;

    /// Retrieves a categoria by id, excluding soft-deleted rows.
    fn get_by_id(&self, user_id: &str, categoria_id: &str) -> Result<Categoria>;

    /// Lists the user's categorias, optionally filtered by active status.
    fn list(&self, user_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Categoria>>;
}

/// Contract for Categoria business operations.
#[async_trait]
pub trait CategoriaServiceTrait: Send + Sync {
    async fn create_categoria(
        &self,
        user_id: &str,
        new_categoria: NewCategoria,
    ) -> Result<Categoria>;

    async fn update_categoria(&self, user_id: &str, update: CategoriaUpdate)
        -> Result<Categoria>;

    async fn delete_categoria(&self, user_id: &str, categoria_id: &str) -> Result<()>;

    fn get_categoria(&self, user_id: &str, categoria_id: &str) -> Result<Categoria>;

    fn list_categorias(&self, user_id: &str, ativo_filter: Option<bool>)
        -> Result<Vec<Categoria>>;
}
