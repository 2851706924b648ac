//! Database model for lancamentos.
//!
//! Monetary values are stored as TEXT to keep full decimal precision; the
//! tipo and status enums are stored as their canonical uppercase strings.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::parse_decimal_string_tolerant;
use financas_core::lancamentos::{
    Lancamento, LancamentoUpdate, NewLancamento, StatusLancamento, TipoLancamento,
};

// treat_none_as_null so updates can clear optional references and payment
// fields instead of silently keeping the old values.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::lancamentos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct LancamentoDB {
    pub id: String,
    pub user_id: String,
    pub tipo: String,
    pub categoria_id: Option<String>,
    pub despesa_id: Option<String>,
    pub fonte_renda_id: Option<String>,
    pub conta_id: Option<String>,
    pub descricao: String,
    pub valor: String,
    pub valor_pago: Option<String>,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<LancamentoDB> for Lancamento {
    fn from(db: LancamentoDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            tipo: TipoLancamento::parse(&db.tipo).unwrap_or_default(),
            categoria_id: db.categoria_id,
            despesa_id: db.despesa_id,
            fonte_renda_id: db.fonte_renda_id,
            conta_id: db.conta_id,
            descricao: db.descricao,
            valor: parse_decimal_string_tolerant(&db.valor, "valor"),
            valor_pago: db
                .valor_pago
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "valor_pago")),
            data_vencimento: db.data_vencimento,
            data_pagamento: db.data_pagamento,
            status: StatusLancamento::parse(&db.status).unwrap_or_default(),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl LancamentoDB {
    pub fn from_new(owner_id: &str, novo: NewLancamento) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: novo.id.unwrap_or_default(),
            user_id: owner_id.to_string(),
            tipo: novo.tipo.as_str().to_string(),
            categoria_id: novo.categoria_id,
            despesa_id: novo.despesa_id,
            fonte_renda_id: novo.fonte_renda_id,
            conta_id: novo.conta_id,
            descricao: novo.descricao,
            valor: novo.valor.to_string(),
            valor_pago: None,
            data_vencimento: novo.data_vencimento,
            data_pagamento: None,
            status: novo.status.as_str().to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn from_update(existing: &LancamentoDB, update: LancamentoUpdate) -> Self {
        Self {
            id: existing.id.clone(),
            user_id: existing.user_id.clone(),
            tipo: update.tipo.as_str().to_string(),
            categoria_id: update.categoria_id,
            despesa_id: update.despesa_id,
            fonte_renda_id: update.fonte_renda_id,
            conta_id: update.conta_id,
            descricao: update.descricao,
            valor: update.valor.to_string(),
            valor_pago: update.valor_pago.map(|v| v.to_string()),
            data_vencimento: update.data_vencimento,
            data_pagamento: update.data_pagamento,
            status: update.status.as_str().to_string(),
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
            deleted_at: existing.deleted_at,
        }
    }
}
