use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use financas_core::{
    categorias::{CategoriaService, CategoriaServiceTrait},
    contas::{ContaService, ContaServiceTrait},
    despesas::{DespesaService, DespesaServiceTrait},
    extrato::ExtratoService,
    fontes_renda::{FonteRendaService, FonteRendaServiceTrait},
    lancamentos::{LancamentoService, LancamentoServiceTrait},
    usuarios::{UsuarioService, UsuarioServiceTrait},
};
use financas_storage_sqlite::{
    categorias::CategoriaRepository, contas::ContaRepository, db, despesas::DespesaRepository,
    fontes_renda::FonteRendaRepository, lancamentos::LancamentoRepository,
    usuarios::UsuarioRepository,
};

use crate::auth::{decode_secret_key, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub usuario_service: Arc<dyn UsuarioServiceTrait>,
    pub categoria_service: Arc<dyn CategoriaServiceTrait>,
    pub despesa_service: Arc<dyn DespesaServiceTrait>,
    pub fonte_renda_service: Arc<dyn FonteRendaServiceTrait>,
    pub conta_service: Arc<dyn ContaServiceTrait>,
    pub lancamento_service: Arc<dyn LancamentoServiceTrait>,
    pub extrato_service: Arc<ExtratoService>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let usuario_repo = Arc::new(UsuarioRepository::new(pool.clone(), writer.clone()));
    let categoria_repo = Arc::new(CategoriaRepository::new(pool.clone(), writer.clone()));
    let despesa_repo = Arc::new(DespesaRepository::new(pool.clone(), writer.clone()));
    let fonte_renda_repo = Arc::new(FonteRendaRepository::new(pool.clone(), writer.clone()));
    let conta_repo = Arc::new(ContaRepository::new(pool.clone(), writer.clone()));
    let lancamento_repo = Arc::new(LancamentoRepository::new(pool.clone(), writer.clone()));

    let usuario_service = Arc::new(UsuarioService::new(usuario_repo));
    let categoria_service = Arc::new(CategoriaService::new(categoria_repo.clone()));
    let despesa_service = Arc::new(DespesaService::new(
        despesa_repo.clone(),
        categoria_repo.clone(),
    ));
    let fonte_renda_service = Arc::new(FonteRendaService::new(fonte_renda_repo.clone()));
    let conta_service = Arc::new(ContaService::new(conta_repo.clone()));
    let lancamento_service = Arc::new(LancamentoService::new(
        lancamento_repo.clone(),
        categoria_repo,
        despesa_repo,
        fonte_renda_repo,
        conta_repo,
    ));
    let extrato_service = Arc::new(ExtratoService::new(lancamento_repo));

    let jwt_secret = decode_secret_key(&config.jwt_secret)?;
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        usuario_service,
        categoria_service,
        despesa_service,
        fonte_renda_service,
        conta_service,
        lancamento_service,
        extrato_service,
        auth,
    }))
}
