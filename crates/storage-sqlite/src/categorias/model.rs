//! Database model for categorias.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use financas_core::categorias::{Categoria, CategoriaUpdate, NewCategoria, TipoCategoria};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categorias)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoriaDB {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    pub tipo: String,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<CategoriaDB> for Categoria {
    fn from(db: CategoriaDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            nome: db.nome,
            tipo: TipoCategoria::parse(&db.tipo).unwrap_or_default(),
            ativo: db.ativo,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl CategoriaDB {
    pub fn from_new(owner_id: &str, novo: NewCategoria) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: novo.id.unwrap_or_default(),
            user_id: owner_id.to_string(),
            nome: novo.nome,
            tipo: novo.tipo.as_str().to_string(),
            ativo: novo.ativo,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Builds the changed row for an update, keeping the fields the update
    /// is not allowed to touch.
    pub fn from_update(existing: &CategoriaDB, update: CategoriaUpdate) -> Self {
        Self {
            id: existing.id.clone(),
            user_id: existing.user_id.clone(),
            nome: update.nome,
            tipo: update.tipo.as_str().to_string(),
            ativo: update.ativo,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
            deleted_at: existing.deleted_at,
        }
    }
}
