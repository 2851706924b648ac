use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::usuarios_model::{normalize_email, NewUsuario, Usuario};
use super::usuarios_traits::{UsuarioRepositoryTrait, UsuarioServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing users.
pub struct UsuarioService {
    repository: Arc<dyn UsuarioRepositoryTrait>,
}

impl UsuarioService {
    pub fn new(repository: Arc<dyn UsuarioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsuarioServiceTrait for UsuarioService {
    async fn register_usuario(
        &self,
        new_usuario: NewUsuario,
        password_hash: String,
    ) -> Result<Usuario> {
        let mut new_usuario = new_usuario;
        new_usuario.email = normalize_email(&new_usuario.email);
        new_usuario.validate()?;

        if self.repository.get_by_email(&new_usuario.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Email '{}' is already registered",
                new_usuario.email
            )));
        }

        debug!("Registering usuario with email {}", new_usuario.email);
        self.repository.create(new_usuario, password_hash).await
    }

    fn get_usuario(&self, usuario_id: &str) -> Result<Usuario> {
        self.repository.get_by_id(usuario_id)
    }

    fn get_usuario_by_email(&self, email: &str) -> Result<Option<Usuario>> {
        self.repository.get_by_email(&normalize_email(email))
    }
}
