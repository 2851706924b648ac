//! SQLite storage implementation for Financas.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `financas-core`: connection pooling, migrations, repository
//! implementations, and the database-specific model types (with Diesel
//! derives).
//!
//! This is the only crate where Diesel dependencies exist; `core` is
//! database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod categorias;
pub mod contas;
pub mod despesas;
pub mod fontes_renda;
pub mod lancamentos;
pub mod usuarios;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from financas-core for convenience
pub use financas_core::errors::{DatabaseError, Error, Result};
