//! Statement and report aggregation.
//!
//! Everything here is recomputed per request from the user's lancamentos;
//! stored rows are never mutated by a projection.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::extrato_model::{
    ExtratoMensal, LancamentoExtrato, ResumoCategoria, ResumoConta, ResumoMensal,
};
use crate::errors::Result;
use crate::lancamentos::{
    Lancamento, LancamentoFilter, LancamentoRepositoryTrait, StatusLancamento, TipoLancamento,
};

pub struct ExtratoService {
    lancamento_repository: Arc<dyn LancamentoRepositoryTrait>,
}

impl ExtratoService {
    pub fn new(lancamento_repository: Arc<dyn LancamentoRepositoryTrait>) -> Self {
        Self {
            lancamento_repository,
        }
    }

    /// The user's statement, grouped by calendar month of `data_vencimento`.
    pub fn extrato(
        &self,
        user_id: &str,
        filter: &LancamentoFilter,
        hoje: NaiveDate,
    ) -> Result<Vec<ExtratoMensal>> {
        let lancamentos = self.lancamento_repository.list(user_id, filter)?;
        Ok(agrupar_por_mes(&lancamentos, hoje))
    }

    pub fn resumo_por_categoria(
        &self,
        user_id: &str,
        filter: &LancamentoFilter,
    ) -> Result<Vec<ResumoCategoria>> {
        let lancamentos = self.lancamento_repository.list(user_id, filter)?;
        Ok(resumo_por_categoria(&lancamentos))
    }

    pub fn resumo_por_conta(
        &self,
        user_id: &str,
        filter: &LancamentoFilter,
    ) -> Result<Vec<ResumoConta>> {
        let lancamentos = self.lancamento_repository.list(user_id, filter)?;
        Ok(resumo_por_conta(&lancamentos))
    }

    /// Receitas vs despesas per month for the last `meses` months, oldest
    /// first. Months without entries still appear, zeroed.
    pub fn resumo_mensal(
        &self,
        user_id: &str,
        meses: u32,
        hoje: NaiveDate,
    ) -> Result<Vec<ResumoMensal>> {
        let lancamentos = self
            .lancamento_repository
            .list(user_id, &LancamentoFilter::default())?;
        Ok(resumo_mensal(&lancamentos, meses, hoje))
    }
}

/// Projects a pending entry past its due date as `ATRASADO`. The stored
/// status is untouched.
pub fn status_projetado(lancamento: &Lancamento, hoje: NaiveDate) -> StatusLancamento {
    if lancamento.status == StatusLancamento::Pendente && lancamento.data_vencimento < hoje {
        StatusLancamento::Atrasado
    } else {
        lancamento.status
    }
}

fn para_extrato(lancamento: &Lancamento, hoje: NaiveDate) -> LancamentoExtrato {
    LancamentoExtrato {
        dias_ate_vencimento: (lancamento.data_vencimento - hoje).num_days(),
        status_projetado: status_projetado(lancamento, hoje),
        lancamento: lancamento.clone(),
    }
}

pub fn agrupar_por_mes(lancamentos: &[Lancamento], hoje: NaiveDate) -> Vec<ExtratoMensal> {
    let mut grupos: BTreeMap<(i32, u32), Vec<LancamentoExtrato>> = BTreeMap::new();
    for lancamento in lancamentos {
        let chave = (
            lancamento.data_vencimento.year(),
            lancamento.data_vencimento.month(),
        );
        grupos
            .entry(chave)
            .or_default()
            .push(para_extrato(lancamento, hoje));
    }

    grupos
        .into_iter()
        .map(|((ano, mes), mut entradas)| {
            entradas.sort_by(|a, b| {
                a.lancamento
                    .data_vencimento
                    .cmp(&b.lancamento.data_vencimento)
            });
            let total: Decimal = entradas.iter().map(|e| e.lancamento.valor).sum();
            let total_pago: Decimal = entradas
                .iter()
                .filter(|e| e.lancamento.status == StatusLancamento::Pago)
                .map(|e| e.lancamento.valor_pago.unwrap_or(e.lancamento.valor))
                .sum();
            let total_pendente: Decimal = entradas
                .iter()
                .filter(|e| e.lancamento.status != StatusLancamento::Pago)
                .map(|e| e.lancamento.valor)
                .sum();
            ExtratoMensal {
                ano,
                mes,
                total,
                total_pago,
                total_pendente,
                lancamentos: entradas,
            }
        })
        .collect()
}

fn totais<'a, F>(lancamentos: &'a [Lancamento], chave: F) -> BTreeMap<Option<String>, (Decimal, Decimal, usize)>
where
    F: Fn(&'a Lancamento) -> Option<String>,
{
    let mut grupos: BTreeMap<Option<String>, (Decimal, Decimal, usize)> = BTreeMap::new();
    for lancamento in lancamentos {
        let entrada = grupos.entry(chave(lancamento)).or_default();
        entrada.0 += lancamento.valor;
        if lancamento.status == StatusLancamento::Pago {
            entrada.1 += lancamento.valor_pago.unwrap_or(lancamento.valor);
        }
        entrada.2 += 1;
    }
    grupos
}

pub fn resumo_por_categoria(lancamentos: &[Lancamento]) -> Vec<ResumoCategoria> {
    totais(lancamentos, |l| l.categoria_id.clone())
        .into_iter()
        .map(
            |(categoria_id, (total, total_pago, quantidade))| ResumoCategoria {
                categoria_id,
                total,
                total_pago,
                quantidade,
            },
        )
        .collect()
}

pub fn resumo_por_conta(lancamentos: &[Lancamento]) -> Vec<ResumoConta> {
    totais(lancamentos, |l| l.conta_id.clone())
        .into_iter()
        .map(|(conta_id, (total, total_pago, quantidade))| ResumoConta {
            conta_id,
            total,
            total_pago,
            quantidade,
        })
        .collect()
}

fn mes_anterior(ano: i32, mes: u32) -> (i32, u32) {
    if mes == 1 {
        (ano - 1, 12)
    } else {
        (ano, mes - 1)
    }
}

pub fn resumo_mensal(lancamentos: &[Lancamento], meses: u32, hoje: NaiveDate) -> Vec<ResumoMensal> {
    let meses = meses.max(1);
    let mut janela = Vec::with_capacity(meses as usize);
    let (mut ano, mut mes) = (hoje.year(), hoje.month());
    for _ in 0..meses {
        janela.push((ano, mes));
        (ano, mes) = mes_anterior(ano, mes);
    }
    janela.reverse();

    let mut por_mes: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    for lancamento in lancamentos {
        let chave = (
            lancamento.data_vencimento.year(),
            lancamento.data_vencimento.month(),
        );
        let entrada = por_mes.entry(chave).or_default();
        match lancamento.tipo {
            TipoLancamento::Receita => entrada.0 += lancamento.valor,
            TipoLancamento::Despesa => entrada.1 += lancamento.valor,
        }
    }

    janela
        .into_iter()
        .map(|(ano, mes)| {
            let (total_receitas, total_despesas) =
                por_mes.get(&(ano, mes)).copied().unwrap_or_default();
            ResumoMensal {
                ano,
                mes,
                total_receitas,
                total_despesas,
                saldo: total_receitas - total_despesas,
            }
        })
        .collect()
}
