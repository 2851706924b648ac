pub mod model;
pub mod repository;

pub use model::ContaDB;
pub use repository::ContaRepository;
