//! Database model for contas.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use financas_core::contas::{Conta, ContaUpdate, NewConta};

// treat_none_as_null so clearing tipo_conta through an update actually
// writes NULL instead of keeping the old value.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::contas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ContaDB {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    pub tipo_conta: Option<String>,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<ContaDB> for Conta {
    fn from(db: ContaDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            nome: db.nome,
            tipo_conta: db.tipo_conta,
            ativo: db.ativo,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl ContaDB {
    pub fn from_new(owner_id: &str, novo: NewConta) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: novo.id.unwrap_or_default(),
            user_id: owner_id.to_string(),
            nome: novo.nome,
            tipo_conta: novo.tipo_conta,
            ativo: novo.ativo,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn from_update(existing: &ContaDB, update: ContaUpdate) -> Self {
        Self {
            id: existing.id.clone(),
            user_id: existing.user_id.clone(),
            nome: update.nome,
            tipo_conta: update.tipo_conta,
            ativo: update.ativo,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
            deleted_at: existing.deleted_at,
        }
    }
}
