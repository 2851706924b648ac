pub mod extrato_model;
pub mod extrato_service;

#[cfg(test)]
mod extrato_service_tests;

pub use extrato_model::{
    ExtratoMensal, LancamentoExtrato, ResumoCategoria, ResumoConta, ResumoMensal,
};
pub use extrato_service::ExtratoService;
