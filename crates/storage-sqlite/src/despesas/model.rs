//! Database model for despesas.
//!
//! Monetary values are stored as TEXT to keep full decimal precision.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_decimal_string_tolerant;
use financas_core::despesas::{Despesa, DespesaUpdate, NewDespesa};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::despesas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DespesaDB {
    pub id: String,
    pub user_id: String,
    pub categoria_id: String,
    pub nome: String,
    pub valor_estimado: String,
    pub dia_vencimento: i32,
    pub mensal: bool,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<DespesaDB> for Despesa {
    fn from(db: DespesaDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            categoria_id: db.categoria_id,
            nome: db.nome,
            valor_estimado: parse_decimal_string_tolerant(&db.valor_estimado, "valor_estimado"),
            dia_vencimento: db.dia_vencimento.max(0) as u32,
            mensal: db.mensal,
            ativo: db.ativo,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl DespesaDB {
    pub fn from_new(owner_id: &str, novo: NewDespesa) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: novo.id.unwrap_or_default(),
            user_id: owner_id.to_string(),
            categoria_id: novo.categoria_id,
            nome: novo.nome,
            valor_estimado: novo.valor_estimado.to_string(),
            dia_vencimento: novo.dia_vencimento as i32,
            mensal: novo.mensal,
            ativo: novo.ativo,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn from_update(existing: &DespesaDB, update: DespesaUpdate) -> Self {
        Self {
            id: existing.id.clone(),
            user_id: existing.user_id.clone(),
            categoria_id: update.categoria_id,
            nome: update.nome,
            valor_estimado: update.valor_estimado.to_string(),
            dia_vencimento: update.dia_vencimento as i32,
            mensal: update.mensal,
            ativo: update.ativo,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
            deleted_at: existing.deleted_at,
        }
    }
}
