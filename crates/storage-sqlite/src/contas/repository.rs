use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::contas;
use crate::schema::contas::dsl::*;

use super::model::ContaDB;
use financas_core::contas::{Conta, ContaRepositoryTrait, ContaUpdate, NewConta};

/// Repository for managing conta data in the database
pub struct ContaRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ContaRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ContaRepositoryTrait for ContaRepository {
    async fn create(&self, owner_id: &str, new_conta: NewConta) -> Result<Conta> {
        new_conta.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = ContaDB::from_new(&owner_id, new_conta);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(contas::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn update(&self, owner_id: &str, update: ContaUpdate) -> Result<Conta> {
        update.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let update_id = update.id.clone().unwrap_or_default();

                let existing = contas
                    .select(ContaDB::as_select())
                    .filter(id.eq(&update_id))
                    .filter(user_id.eq(&owner_id))
                    .filter(deleted_at.is_null())
                    .first::<ContaDB>(conn)
                    .into_core()?;

                let row = ContaDB::from_update(&existing, update);

                diesel::update(contas.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, owner_id: &str, conta_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let id_to_delete = conta_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::update(
                    contas
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

    fn get_by_id(&self, owner_id: &str, conta_id: &str) -> Result<Conta> {
        let mut conn = get_connection(&self.pool)?;

        let row = contas
            .select(ContaDB::as_select())
            .filter(id.eq(conta_id))
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null())
            .first::<ContaDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn list(&self, owner_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Conta>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = contas::table
            .into_boxed()
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null());

        if let Some(active) = ativo_filter {
            query = query.filter(ativo.eq(active));
        }

        let results = query
            .select(ContaDB::as_select())
            .order((ativo.desc(), nome.asc()))
            .load::<ContaDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Conta::from).collect())
    }
}
