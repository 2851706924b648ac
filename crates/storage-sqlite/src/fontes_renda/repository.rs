use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::fontes_renda;
use crate::schema::fontes_renda::dsl::*;

use super::model::FonteRendaDB;
use financas_core::fontes_renda::{
    FonteRenda, FonteRendaRepositoryTrait, FonteRendaUpdate, NewFonteRenda,
};

/// Repository for managing fonte de renda data in the database
pub struct FonteRendaRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl FonteRendaRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl FonteRendaRepositoryTrait for FonteRendaRepository {
    async fn create(&self, owner_id: &str, new_fonte: NewFonteRenda) -> Result<FonteRenda> {
        new_fonte.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = FonteRendaDB::from_new(&owner_id, new_fonte);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(fontes_renda::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn update(&self, owner_id: &str, update: FonteRendaUpdate) -> Result<FonteRenda> {
        update.validate()?;

        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let update_id = update.id.clone().unwrap_or_default();

                let existing = fontes_renda
                    .select(FonteRendaDB::as_select())
                    .filter(id.eq(&update_id))
                    .filter(user_id.eq(&owner_id))
                    .filter(deleted_at.is_null())
                    .first::<FonteRendaDB>(conn)
                    .into_core()?;

                let row = FonteRendaDB::from_update(&existing, update);

                diesel::update(fontes_renda.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, owner_id: &str, fonte_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let id_to_delete = fonte_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::update(
                    fontes_renda
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

    fn get_by_id(&self, owner_id: &str, fonte_id: &str) -> Result<FonteRenda> {
        let mut conn = get_connection(&self.pool)?;

        let row = fontes_renda
            .select(FonteRendaDB::as_select())
            .filter(id.eq(fonte_id))
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null())
            .first::<FonteRendaDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn list(&self, owner_id: &str, ativo_filter: Option<bool>) -> Result<Vec<FonteRenda>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = fontes_renda::table
            .into_boxed()
            .filter(user_id.eq(owner_id))
            .filter(deleted_at.is_null());

        if let Some(active) = ativo_filter {
            query = query.filter(ativo.eq(active));
        }

        let results = query
            .select(FonteRendaDB::as_select())
            .order((dia_recebimento.asc(), nome.asc()))
            .load::<FonteRendaDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(FonteRenda::from).collect())
    }
}
