use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use financas_core::fontes_renda::{FonteRenda, FonteRendaUpdate, NewFonteRenda};

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
struct ListQuery {
    ativo: Option<bool>,
}

async fn list_fontes_renda(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<FonteRenda>>> {
    let fontes = state
        .fonte_renda_service
        .list_fontes_renda(&usuario.0, query.ativo)?;
    Ok(Json(fontes))
}

async fn get_fonte_renda(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<Json<FonteRenda>> {
    let fonte = state.fonte_renda_service.get_fonte_renda(&usuario.0, &id)?;
    Ok(Json(fonte))
}

async fn create_fonte_renda(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Json(payload): Json<NewFonteRenda>,
) -> ApiResult<(StatusCode, Json<FonteRenda>)> {
    let fonte = state
        .fonte_renda_service
        .create_fonte_renda(&usuario.0, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(fonte)))
}

async fn update_fonte_renda(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    Json(mut payload): Json<FonteRendaUpdate>,
) -> ApiResult<Json<FonteRenda>> {
    payload.id = Some(id);
    let fonte = state
        .fonte_renda_service
        .update_fonte_renda(&usuario.0, payload)
        .await?;
    Ok(Json(fonte))
}

async fn delete_fonte_renda(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .fonte_renda_service
        .delete_fonte_renda(&usuario.0, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/fontes-renda",
            get(list_fontes_renda).post(create_fonte_renda),
        )
        .route(
            "/fontes-renda/{id}",
            get(get_fonte_renda)
                .put(update_fonte_renda)
                .delete(delete_fonte_renda),
        )
}
