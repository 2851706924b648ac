//! Database model for usuarios.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use financas_core::usuarios::{NewUsuario, Usuario};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::usuarios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UsuarioDB {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UsuarioDB> for Usuario {
    fn from(db: UsuarioDB) -> Self {
        Self {
            id: db.id,
            nome: db.nome,
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl UsuarioDB {
    pub fn from_new(novo: NewUsuario, password_hash: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            nome: novo.nome,
            // Already normalized by the service; stored as received.
            email: novo.email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
