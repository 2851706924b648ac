use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use financas_core::despesas::{Despesa, DespesaUpdate, NewDespesa};

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    ativo: Option<bool>,
    categoria_id: Option<String>,
}

async fn list_despesas(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Despesa>>> {
    let despesas = state.despesa_service.list_despesas(
        &usuario.0,
        query.ativo,
        query.categoria_id.as_deref(),
    )?;
    Ok(Json(despesas))
}

async fn get_despesa(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<Json<Despesa>> {
    let despesa = state.despesa_service.get_despesa(&usuario.0, &id)?;
    Ok(Json(despesa))
}

async fn create_despesa(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Json(payload): Json<NewDespesa>,
) -> ApiResult<(StatusCode, Json<Despesa>)> {
    let despesa = state
        .despesa_service
        .create_despesa(&usuario.0, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(despesa)))
}

async fn update_despesa(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    Json(mut payload): Json<DespesaUpdate>,
) -> ApiResult<Json<Despesa>> {
    payload.id = Some(id);
    let despesa = state
        .despesa_service
        .update_despesa(&usuario.0, payload)
        .await?;
    Ok(Json(despesa))
}

async fn delete_despesa(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.despesa_service.delete_despesa(&usuario.0, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/despesas", get(list_despesas).post(create_despesa))
        .route(
            "/despesas/{id}",
            get(get_despesa).put(update_despesa).delete(delete_despesa),
        )
}
