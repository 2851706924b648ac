//! Categoria domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Whether a categoria classifies expenses or income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoCategoria {
    #[default]
    Despesa,
    Receita,
}

impl TipoCategoria {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoCategoria::Despesa => "DESPESA",
            TipoCategoria::Receita => "RECEITA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DESPESA" => Some(TipoCategoria::Despesa),
            "RECEITA" => Some(TipoCategoria::Receita),
            _ => None,
        }
    }
}

/// Domain model representing a user-defined classification label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: String,
    pub user_id: String,
    pub nome: String,
    pub tipo: TipoCategoria,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new categoria.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    #[serde(default)]
    pub tipo: TipoCategoria,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl NewCategoria {
    pub fn validate(&self) -> Result<()> {
        if self.nome.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nome".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing categoria.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaUpdate {
    pub id: Option<String>,
    pub nome: String,
    pub tipo: TipoCategoria,
    pub ativo: bool,
}

impl CategoriaUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Categoria ID is required for updates".to_string(),
            )));
        }
        if self.nome.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nome".to_string(),
            )));
        }
        Ok(())
    }
}
