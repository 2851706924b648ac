use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::lancamentos_model::{
    Lancamento, LancamentoFilter, LancamentoUpdate, NewLancamento, PagamentoLancamento,
    StatusLancamento,
};
use super::lancamentos_traits::{LancamentoRepositoryTrait, LancamentoServiceTrait};
use crate::categorias::CategoriaRepositoryTrait;
use crate::contas::ContaRepositoryTrait;
use crate::despesas::DespesaRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::fontes_renda::FonteRendaRepositoryTrait;

/// Service for managing lancamentos.
///
/// Holds the sibling repositories so every optional reference can be checked
/// for existence (and ownership) before a write is delegated.
pub struct LancamentoService {
    repository: Arc<dyn LancamentoRepositoryTrait>,
    categoria_repository: Arc<dyn CategoriaRepositoryTrait>,
    despesa_repository: Arc<dyn DespesaRepositoryTrait>,
    fonte_renda_repository: Arc<dyn FonteRendaRepositoryTrait>,
    conta_repository: Arc<dyn ContaRepositoryTrait>,
}

impl LancamentoService {
    pub fn new(
        repository: Arc<dyn LancamentoRepositoryTrait>,
        categoria_repository: Arc<dyn CategoriaRepositoryTrait>,
        despesa_repository: Arc<dyn DespesaRepositoryTrait>,
        fonte_renda_repository: Arc<dyn FonteRendaRepositoryTrait>,
        conta_repository: Arc<dyn ContaRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            categoria_repository,
            despesa_repository,
            fonte_renda_repository,
            conta_repository,
        }
    }

    fn not_found_as_validation<T>(result: Result<T>, entity: &str, id: &str) -> Result<()> {
        match result {
            Ok(_) => Ok(()),
            Err(Error::Database(DatabaseError::NotFound(_))) => Err(Error::Validation(
                ValidationError::InvalidInput(format!("{} '{}' not found", entity, id)),
            )),
            Err(e) => Err(e),
        }
    }

    fn check_referencias(
        &self,
        user_id: &str,
        categoria_id: Option<&str>,
        despesa_id: Option<&str>,
        fonte_renda_id: Option<&str>,
        conta_id: Option<&str>,
    ) -> Result<()> {
        if let Some(id) = categoria_id {
            Self::not_found_as_validation(
                self.categoria_repository.get_by_id(user_id, id),
                "Categoria",
                id,
            )?;
        }
        if let Some(id) = despesa_id {
            Self::not_found_as_validation(
                self.despesa_repository.get_by_id(user_id, id),
                "Despesa",
                id,
            )?;
        }
        if let Some(id) = fonte_renda_id {
            Self::not_found_as_validation(
                self.fonte_renda_repository.get_by_id(user_id, id),
                "FonteRenda",
                id,
            )?;
        }
        if let Some(id) = conta_id {
            Self::not_found_as_validation(
                self.conta_repository.get_by_id(user_id, id),
                "Conta",
                id,
            )?;
        }
        Ok(())
    }
}

#[async_trait]
impl LancamentoServiceTrait for LancamentoService {
    async fn create_lancamento(
        &self,
        user_id: &str,
        new_lancamento: NewLancamento,
    ) -> Result<Lancamento> {
        new_lancamento.validate()?;
        self.check_referencias(
            user_id,
            new_lancamento.categoria_id.as_deref(),
            new_lancamento.despesa_id.as_deref(),
            new_lancamento.fonte_renda_id.as_deref(),
            new_lancamento.conta_id.as_deref(),
        )?;
        debug!(
            "Creating lancamento '{}' for {}",
            new_lancamento.descricao, user_id
        );
        self.repository.create(user_id, new_lancamento).await
    }

    async fn update_lancamento(
        &self,
        user_id: &str,
        update: LancamentoUpdate,
        hoje: NaiveDate,
    ) -> Result<Lancamento> {
        update.validate()?;
        self.check_referencias(
            user_id,
            update.categoria_id.as_deref(),
            update.despesa_id.as_deref(),
            update.fonte_renda_id.as_deref(),
            update.conta_id.as_deref(),
        )?;

        // Moving into PAGO through a plain update still fills the payment fields.
        let mut update = update;
        if update.status == StatusLancamento::Pago {
            if update.valor_pago.is_none() {
                update.valor_pago = Some(update.valor);
            }
            if update.data_pagamento.is_none() {
                update.data_pagamento = Some(hoje);
            }
        }

        self.repository.update(user_id, update).await
    }

    async fn delete_lancamento(&self, user_id: &str, lancamento_id: &str) -> Result<()> {
        self.repository.delete(user_id, lancamento_id).await?;
        Ok(())
    }

    fn get_lancamento(&self, user_id: &str, lancamento_id: &str) -> Result<Lancamento> {
        self.repository.get_by_id(user_id, lancamento_id)
    }

    fn list_lancamentos(
        &self,
        user_id: &str,
        filter: &LancamentoFilter,
    ) -> Result<Vec<Lancamento>> {
        self.repository.list(user_id, filter)
    }

    async fn pagar_lancamento(
        &self,
        user_id: &str,
        lancamento_id: &str,
        pagamento: PagamentoLancamento,
        hoje: NaiveDate,
    ) -> Result<Lancamento> {
        pagamento.validate()?;
        let existente = self.repository.get_by_id(user_id, lancamento_id)?;

        let update = LancamentoUpdate {
            id: Some(existente.id.clone()),
            tipo: existente.tipo,
            categoria_id: existente.categoria_id.clone(),
            despesa_id: existente.despesa_id.clone(),
            fonte_renda_id: existente.fonte_renda_id.clone(),
            conta_id: existente.conta_id.clone(),
            descricao: existente.descricao.clone(),
            valor: existente.valor,
            valor_pago: Some(pagamento.valor_pago.unwrap_or(existente.valor)),
            data_vencimento: existente.data_vencimento,
            data_pagamento: Some(pagamento.data_pagamento.unwrap_or(hoje)),
            status: StatusLancamento::Pago,
        };

        self.repository.update(user_id, update).await
    }
}
