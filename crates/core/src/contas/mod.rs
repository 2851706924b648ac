//! Contas module - domain models, services, and traits.

mod contas_model;
mod contas_service;
mod contas_traits;

pub use contas_model::{Conta, ContaUpdate, NewConta};
pub use contas_service::ContaService;
pub use contas_traits::{ContaRepositoryTrait, ContaServiceTrait};
