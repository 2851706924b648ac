use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use financas_core::contas::{Conta, ContaUpdate, NewConta};

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
struct ListQuery {
    ativo: Option<bool>,
}

async fn list_contas(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Conta>>> {
    let contas = state.conta_service.list_contas(&usuario.0, query.ativo)?;
    Ok(Json(contas))
}

async fn get_conta(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<Json<Conta>> {
    let conta = state.conta_service.get_conta(&usuario.0, &id)?;
    Ok(Json(conta))
}

async fn create_conta(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Json(payload): Json<NewConta>,
) -> ApiResult<(StatusCode, Json<Conta>)> {
    let conta = state.conta_service.create_conta(&usuario.0, payload).await?;
    Ok((StatusCode::CREATED, Json(conta)))
}

async fn update_conta(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    Json(mut payload): Json<ContaUpdate>,
) -> ApiResult<Json<Conta>> {
    payload.id = Some(id);
    let conta = state.conta_service.update_conta(&usuario.0, payload).await?;
    Ok(Json(conta))
}

async fn delete_conta(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.conta_service.delete_conta(&usuario.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contas", get(list_contas).post(create_conta))
        .route(
            "/contas/{id}",
            get(get_conta).put(update_conta).delete(delete_conta),
        )
}
