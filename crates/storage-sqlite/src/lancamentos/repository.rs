use async_trait::async_trait;
use chrono::Datelike;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::lancamentos;
use crate::schema::lancamentos::dsl::*;

use super::model::LancamentoDB;
use financas_core::lancamentos::{
    Lancamento, LancamentoFilter, LancamentoRepositoryTrait, LancamentoUpdate, NewLancamento,
};

/// Repository for managing lancamento data in the database
pub struct LancamentoRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LancamentoRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LancamentoRepositoryTrait for LancamentoRepository {
    async fn create(&self, owner_id: &str, new_lancamento: NewLancamento) -> Result<Lancamento> {
        new_lancamento.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = LancamentoDB::from_new(&owner_id, new_lancamento);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(lancamentos::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn update(&self, owner_id: &str, update: LancamentoUpdate) -> Result<Lancamento> {
        update.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let update_id = update.id.clone().unwrap_or_default();

                let existing = lancamentos
                    .select(LancamentoDB::as_select())
                    .filter(id.eq(&update_id))
                    .filter(user_id.eq(&owner_id))
                    .filter(deleted_at.is_null())
                    .first::<LancamentoDB>(conn)
                    .into_core()?;

                let row = LancamentoDB::from_update(&existing, update);

                diesel::update(lancamentos.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, owner_id: &str, lancamento_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let id_to_delete = lancamento_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::update(
                    lancamentos
                        .filter(id.eq(&id_to_delete))
                        .filter(user_id.eq(&owner_id))
                        .filter(deleted_at.is_null()),
                )
                .set(deleted_at.eq(Some(chrono::Utc::now().naive_utc())))
                .execute(conn)
                .into_core()?;

                Ok(affected_rows)
            })
            .await
    }

    fn get_by_id(&self, owner_id: &str, lancamento_id: &str) -> Result<Lancamento> {
        let mut conn = get_connection(&self.pool)?;

        let row = lancamentos
            .select(LancamentoDB::as_select())
            .filter(id.eq(lancamento_id))
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null())
            .first::<LancamentoDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn list(&self, owner_id: &str, filter: &LancamentoFilter) -> Result<Vec<Lancamento>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = lancamentos::table
            .into_boxed()
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null());

        if let Some(ref conta_filter) = filter.conta_id {
            query = query.filter(conta_id.eq(conta_filter.clone()));
        }

        if let Some(ref categoria_filter) = filter.categoria_id {
            query = query.filter(categoria_id.eq(categoria_filter.clone()));
        }

        if let Some(status_filter) = filter.status {
            query = query.filter(status.eq(status_filter.as_str()));
        }

        if let Some(tipo_filter) = filter.tipo {
            query = query.filter(tipo.eq(tipo_filter.as_str()));
        }

        let results = query
            .select(LancamentoDB::as_select())
            .order(data_vencimento.asc())
            .load::<LancamentoDB>(&mut conn)
            .into_core()?;

        // Month filtering happens here: SQLite stores dates as text and has
        // no typed year/month extraction Diesel can express portably.
        let filtro_ano = filter.ano;
        let filtro_mes = filter.mes;
        Ok(results
            .into_iter()
            .map(Lancamento::from)
            .filter(|l| filtro_ano.map_or(true, |a| l.data_vencimento.year() == a))
            .filter(|l| filtro_mes.map_or(true, |m| l.data_vencimento.month() == m))
            .collect())
    }
}
