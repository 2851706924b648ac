//! Financas Core - Domain entities, services, and traits.
//!
//! This crate is database-agnostic: repositories are defined as traits and
//! implemented by the storage crate. Services hold business validation and
//! ownership checks; the statement/report aggregation lives in [`extrato`].

pub mod constants;
pub mod errors;

pub mod categorias;
pub mod contas;
pub mod despesas;
pub mod extrato;
pub mod fontes_renda;
pub mod lancamentos;
pub mod usuarios;

pub use errors::{DatabaseError, Error, Result, ValidationError};
