//! Categorias module - domain models, services, and traits.

mod categorias_model;
mod categorias_service;
mod categorias_traits;

pub use categorias_model::{Categoria, CategoriaUpdate, NewCategoria, TipoCategoria};
pub use categorias_service::CategoriaService;
pub use categorias_traits::{CategoriaRepositoryTrait, CategoriaServiceTrait};
