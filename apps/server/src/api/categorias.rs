use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use financas_core::categorias::{Categoria, CategoriaUpdate, NewCategoria};

use crate::auth::AuthUsuario;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(serde::Deserialize)]
struct ListQuery {
    ativo: Option<bool>,
}

async fn list_categorias(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Categoria>>> {
    let categorias = state.categoria_service.list_categorias(&usuario.0, query.ativo)?;
    Ok(Json(categorias))
}

async fn get_categoria(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<Json<Categoria>> {
    let categoria = state.categoria_service.get_categoria(&usuario.0, &id)?;
    Ok(Json(categoria))
}

async fn create_categoria(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Json(payload): Json<NewCategoria>,
) -> ApiResult<(StatusCode, Json<Categoria>)> {
    let categoria = state
        .categoria_service
        .create_categoria(&usuario.0, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(categoria)))
}

async fn update_categoria(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
    Json(mut payload): Json<CategoriaUpdate>,
) -> ApiResult<Json<Categoria>> {
    payload.id = Some(id);
    let categoria = state
        .categoria_service
        .update_categoria(&usuario.0, payload)
        .await?;
    Ok(Json(categoria))
}

async fn delete_categoria(
    State(state): State<Arc<AppState>>,
    Extension(usuario): Extension<AuthUsuario>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .categoria_service
        .delete_categoria(&usuario.0, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categorias", get(list_categorias).post(create_categoria))
        .route(
            "/categorias/{id}",
            get(get_categoria)
                .put(update_categoria)
                .delete(delete_categoria),
        )
}
