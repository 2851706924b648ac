pub mod model;
pub mod repository;

pub use model::DespesaDB;
pub use repository::DespesaRepository;
