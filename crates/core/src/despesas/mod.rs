//! Despesas module - domain models, services, and traits.

mod despesas_model;
#[cfg(test)]
mod despesas_model_tests;
mod despesas_service;
mod despesas_traits;

pub use despesas_model::{Despesa, DespesaUpdate, NewDespesa};
pub use despesas_service::DespesaService;
pub use despesas_traits::{DespesaRepositoryTrait, DespesaServiceTrait};
