use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::categorias;
use crate::schema::categorias::dsl::*;

use super::model::CategoriaDB;
use financas_core::categorias::{
    Categoria, CategoriaRepositoryTrait, CategoriaUpdate, NewCategoria,
};

/// Repository for managing categoria data in the database
pub struct CategoriaRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CategoriaRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CategoriaRepositoryTrait for CategoriaRepository {
    async fn create(&self, owner_id: &str, new_categoria: NewCategoria) -> Result<Categoria> {
        new_categoria.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = CategoriaDB::from_new(&owner_id, new_categoria);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(categorias::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn update(&self, owner_id: &str, update: CategoriaUpdate) -> Result<Categoria> {
        update.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let update_id = update.id.clone().unwrap_or_default();

                let existing = categorias
                    .select(CategoriaDB::as_select())
                    .filter(id.eq(&update_id))
                    .filter(user_id.eq(&owner_id))
                    .filter(deleted_at.is_null())
                    .first::<CategoriaDB>(conn)
                    .into_core()?;

                let row = CategoriaDB::from_update(&existing, update);

                diesel::update(categorias.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, owner_id: &str, categoria_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let id_to_delete = categoria_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::update(
                    categorias
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

    fn get_by_id(&self, owner_id: &str, categoria_id: &str) -> Result<Categoria> {
        let mut conn = get_connection(&self.pool)?;

        let row = categorias
            .select(CategoriaDB::as_select())
            .filter(id.eq(categoria_id))
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null())
            .first::<CategoriaDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn list(&self, owner_id: &str, ativo_filter: Option<bool>) -> Result<Vec<Categoria>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = categorias::table
            .into_boxed()
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null());

        if let Some(active) = ativo_filter {
            query = query.filter(ativo.eq(active));
        }

        let results = query
            .select(CategoriaDB::as_select())
            .order((ativo.desc(), nome.asc()))
            .load::<CategoriaDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Categoria::from).collect())
    }
}
