//! Usuario repository and service traits.

use async_trait::async_trait;

use super::usuarios_model::{NewUsuario, Usuario};
use crate::errors::Result;

/// Contract for Usuario persistence.
#[async_trait]
pub trait UsuarioRepositoryTrait: Send + Sync {
    /// Inserts a new user with an already-hashed password.
    async fn create(&self, new_usuario: NewUsuario, password_hash: String) -> Result<Usuario>;

    /// Retrieves a user by id.
    fn get_by_id(&self, usuario_id: &str) -> Result<Usuario>;

    /// Retrieves a user by email, if present.
    fn get_by_email(&self, email: &str) -> Result<Option<Usuario>>;
}

/// Contract for Usuario business operations.
#[async_trait]
pub trait UsuarioServiceTrait: Send + Sync {
    /// Registers a new user. Fails if the email is already taken.
    async fn register_usuario(
        &self,
        new_usuario: NewUsuario,
        password_hash: String,
    ) -> Result<Usuario>;

    fn get_usuario(&self, usuario_id: &str) -> Result<Usuario>;

    fn get_usuario_by_email(&self, email: &str) -> Result<Option<Usuario>>;
}
