use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use financas_core::extrato::{ExtratoMensal, ResumoCategoria, ResumoConta, ResumoMensal};
use financas_core::lancamentos::LancamentoFilter;

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_extrato(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(filter): Query<LancamentoFilter>,
) -> ApiResult<Json<Vec<ExtratoMensal>>> {
    let hoje = chrono::Local::now().date_naive();
    let extrato = state.extrato_service.extrato(&usuario.0, &filter, hoje)?;
    Ok(Json(extrato))
}

async fn resumo_por_categoria(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(filter): Query<LancamentoFilter>,
) -> ApiResult<Json<Vec<ResumoCategoria>>> {
    let resumo = state
        .extrato_service
        .resumo_por_categoria(&usuario.0, &filter)?;
    Ok(Json(resumo))
}

async fn resumo_por_conta(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(filter): Query<LancamentoFilter>,
) -> ApiResult<Json<Vec<ResumoConta>>> {
    let resumo = state
        .extrato_service
        .resumo_por_conta(&usuario.0, &filter)?;
    Ok(Json(resumo))
}

#[derive(serde::Deserialize)]
struct ResumoMensalQuery {
    meses: Option<u32>,
}

async fn resumo_mensal(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(query): Query<ResumoMensalQuery>,
) -> ApiResult<Json<Vec<ResumoMensal>>> {
    let hoje = chrono::Local::now().date_naive();
    let resumo =
        state
            .extrato_service
            .resumo_mensal(&usuario.0, query.meses.unwrap_or(12), hoje)?;
    Ok(Json(resumo))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/extrato", get(get_extrato))
        .route("/relatorios/resumo-mensal", get(resumo_mensal))
        .route("/relatorios/por-categoria", get(resumo_por_categoria))
        .route("/relatorios/por-conta", get(resumo_por_conta))
}
