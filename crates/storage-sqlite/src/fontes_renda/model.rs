//! Database model for fontes de renda.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_decimal_string_tolerant;
use financas_core::fontes_renda::{FonteRenda, FonteRendaUpdate, NewFonteRenda};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::fontes_renda)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FonteRendaDB {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    pub valor_estimado: String,
    pub dia_recebimento: i32,
    pub mensal: bool,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<FonteRendaDB> for FonteRenda {
    fn from(db: FonteRendaDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            nome: db.nome,
            valor_estimado: parse_decimal_string_tolerant(&db.valor_estimado, "valor_estimado"),
            dia_recebimento: db.dia_recebimento.max(0) as u32,
            mensal: db.mensal,
            ativo: db.ativo,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl FonteRendaDB {
    pub fn from_new(owner_id: &str, novo: NewFonteRenda) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: novo.id.unwrap_or_default(),
            user_id: owner_id.to_string(),
            nome: novo.nome,
            valor_estimado: novo.valor_estimado.to_string(),
            dia_recebimento: novo.dia_recebimento as i32,
            mensal: novo.mensal,
            ativo: novo.ativo,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn from_update(existing: &FonteRendaDB, update: FonteRendaUpdate) -> Self {
        Self {
            id: existing.id.clone(),
            user_id: existing.user_id.clone(),
            nome: update.nome,
            valor_estimado: update.valor_estimado.to_string(),
            dia_recebimento: update.dia_recebimento as i32,
            mensal: update.mensal,
            ativo: update.ativo,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
            deleted_at: existing.deleted_at,
        }
    }
}
