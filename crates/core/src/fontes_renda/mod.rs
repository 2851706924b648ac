//! Fontes de renda module - domain models, services, and traits.

mod fontes_renda_model;
mod fontes_renda_service;
mod fontes_renda_traits;

pub use fontes_renda_model::{FonteRenda, FonteRendaUpdate, NewFonteRenda};
pub use fontes_renda_service::FonteRendaService;
pub use fontes_renda_traits::{FonteRendaRepositoryTrait, FonteRendaServiceTrait};
