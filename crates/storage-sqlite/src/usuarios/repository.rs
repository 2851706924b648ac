use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, Result};
use crate::schema::usuarios;
use crate::schema::usuarios::dsl::*;

use super::model::UsuarioDB;
use financas_core::usuarios::{NewUsuario, Usuario, UsuarioRepositoryTrait};

/// Repository for managing user records in the database
pub struct UsuarioRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UsuarioRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UsuarioRepositoryTrait for UsuarioRepository {
    async fn create(&self, new_usuario: NewUsuario, hash: String) -> Result<Usuario> {
        new_usuario.validate()?;

        self.writer
            .exec(move |conn| {
                let mut row = UsuarioDB::from_new(new_usuario, hash);
                row.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(usuarios::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(row.into())
            })
            .await
    }

    fn get_by_id(&self, usuario_id: &str) -> Result<Usuario> {
        let mut conn = get_connection(&self.pool)?;

        let row = usuarios
            .select(UsuarioDB::as_select())
            .find(usuario_id)
            .first::<UsuarioDB>(&mut conn)
            .into_core()?;

        Ok(row.into())
    }

    fn get_by_email(&self, email_param: &str) -> Result<Option<Usuario>> {
        let mut conn = get_connection(&self.pool)?;

        let row = usuarios
            .select(UsuarioDB::as_select())
            .filter(email.eq(email_param))
            .first::<UsuarioDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(row.map(Usuario::from))
    }
}
