//! Lancamentos module - ledger entries (payments and scheduled commitments).

mod lancamentos_model;
#[cfg(test)]
mod lancamentos_model_tests;
mod lancamentos_service;
mod lancamentos_traits;

pub use lancamentos_model::{
    Lancamento, LancamentoFilter, LancamentoUpdate, NewLancamento, PagamentoLancamento,
    StatusLancamento, TipoLancamento,
};
pub use lancamentos_service::LancamentoService;
pub use lancamentos_traits::{LancamentoRepositoryTrait, LancamentoServiceTrait};
