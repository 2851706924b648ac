//! FonteRenda repository and service traits.

use async_trait::async_trait;

use super::fontes_renda_model::{FonteRenda, FonteRendaUpdate, NewFonteRenda};
use crate::errors::Result;

/// Contract for FonteRenda persistence. All operations are user-scoped.
#[async_trait]
pub trait FonteRendaRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_fonte: NewFonteRenda) -> Result<FonteRenda>;

    async fn update(&self, user_id: &str, update: FonteRendaUpdate) -> Result<FonteRenda>;

    /// Soft-deletes a fonte de renda. Returns the number of affected rows.
    async fn delete(&self, user_id: &str, fonte_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, fonte_id: &str) -> Result<FonteRenda>;

    fn list(&self, user_id: &str, ativo_filter: Option<bool>) -> Result<Vec<FonteRenda>>;
}

/// Contract for FonteRenda business operations.
#[async_trait]
pub trait FonteRendaServiceTrait: Send + Sync {
    async fn create_fonte_renda(
        &self,
        user_id: &str,
        new_fonte: NewFonteRenda,
    ) -> Result<FonteRenda>;

    async fn update_fonte_renda(
        &self,
        user_id: &str,
        update: FonteRendaUpdate,
    ) -> Result<FonteRenda>;

    async fn delete_fonte_renda(&self, user_id: &str, fonte_id: &str) -> Result<()>;

    fn get_fonte_renda(&self, user_id: &str, fonte_id: &str) -> Result<FonteRenda>;

    fn list_fontes_renda(
        &self,
        user_id: &str,
        ativo_filter: Option<bool>,
    ) -> Result<Vec<FonteRenda>>;
}
