//! Usuarios module - domain models, services, and traits.

mod usuarios_model;
mod usuarios_service;
mod usuarios_traits;

pub use usuarios_model::{normalize_email, NewUsuario, Usuario};
pub use usuarios_service::UsuarioService;
pub use usuarios_traits::{UsuarioRepositoryTrait, UsuarioServiceTrait};
