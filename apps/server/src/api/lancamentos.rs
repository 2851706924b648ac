use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use financas_core::lancamentos::{
    Lancamento, LancamentoFilter, LancamentoUpdate, NewLancamento, PagamentoLancamento,
};

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_lancamentos(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(filter): Query<LancamentoFilter>,
) -> ApiResult<Json<Vec<Lancamento>>> {
    let lancamentos = state
        .lancamento_service
        .list_lancamentos(&usuario.0, &filter)?;
    Ok(Json(lancamentos))
}

async fn get_lancamento(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<Json<Lancamento>> {
    let lancamento = state.lancamento_service.get_lancamento(&usuario.0, &id)?;
    Ok(Json(lancamento))
}

async fn create_lancamento(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Json(payload): Json<NewLancamento>,
) -> ApiResult<(StatusCode, Json<Lancamento>)> {
    let lancamento = state
        .lancamento_service
        .create_lancamento(&usuario.0, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(lancamento)))
}

async fn update_lancamento(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    Json(mut payload): Json<LancamentoUpdate>,
) -> ApiResult<Json<Lancamento>> {
    payload.id = Some(id);
    let hoje = chrono::Local::now().date_naive();
    let lancamento = state
        .lancamento_service
        .update_lancamento(&usuario.0, payload, hoje)
        .await?;
    Ok(Json(lancamento))
}

async fn delete_lancamento(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .lancamento_service
        .delete_lancamento(&usuario.0, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// Body is optional: an empty POST pays the full amount dated today.
async fn pagar_lancamento(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    payload: Option<Json<PagamentoLancamento>>,
) -> ApiResult<Json<Lancamento>> {
    let pagamento = payload.map(|Json(p)| p).unwrap_or_default();
    let hoje = chrono::Local::now().date_naive();
    let lancamento = state
        .lancamento_service
        .pagar_lancamento(&usuario.0, &id, pagamento, hoje)
        .await?;
    Ok(Json(lancamento))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lancamentos", get(list_lancamentos).post(create_lancamento))
        .route(
            "/lancamentos/{id}",
            get(get_lancamento)
                .put(update_lancamento)
                .delete(delete_lancamento),
        )
        .route("/lancamentos/{id}/pagar", post(pagar_lancamento))
}
