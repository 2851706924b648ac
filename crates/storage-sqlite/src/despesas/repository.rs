use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::despesas;
use crate::schema::despesas::dsl::*;

use super::model::DespesaDB;
use financas_core::despesas::{Despesa, DespesaRepositoryTrait, DespesaUpdate, NewDespesa};

/// Repository for managing despesa data in the database
pub struct DespesaRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl DespesaRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl DespesaRepositoryTrait for DespesaRepository {
    async fn create(&self, owner_id: &str, new_despesa: NewDespesa) -> Result<Despesa> {
        new_despesa.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = DespesaDB::from_new(&owner_id, new_despesa);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(despesas::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn update(&self, owner_id: &str, update: DespesaUpdate) -> Result<Despesa> {
        update.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let update_id = update.id.clone().unwrap_or_default();

                let existing = despesas
                    .select(DespesaDB::as_select())
                    .filter(id.eq(&update_id))
                    .filter(user_id.eq(&owner_id))
                    .filter(deleted_at.is_null())
                    .first::<DespesaDB>(conn)
                    .into_core()?;

                let row = DespesaDB::from_update(&existing, update);

                diesel::update(despesas.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, owner_id: &str, despesa_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let id_to_delete = despesa_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::update(
                    despesas
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

    fn get_by_id(&self, owner_id: &str, despesa_id: &str) -> Result<Despesa> {
        let mut conn = get_connection(&self.pool)?;

        let row = despesas
            .select(DespesaDB::as_select())
            .filter(id.eq(despesa_id))
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null())
            .first::<DespesaDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn list(
        &self,
        owner_id: &str,
        ativo_filter: Option<bool>,
        categoria_filter: Option<&str>,
    ) -> Result<Vec<Despesa>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = despesas::table
            .into_boxed()
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null());

        if let Some(active) = ativo_filter {
            query = query.filter(ativo.eq(active));
        }

        if let Some(cat) = categoria_filter {
            query = query.filter(categoria_id.eq(cat.to_string()));
        }

        let results = query
            .select(DespesaDB::as_select())
            .order((dia_vencimento.asc(), nome.asc()))
            .load::<DespesaDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Despesa::from).collect())
    }
}
