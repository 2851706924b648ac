pub mod model;
pub mod repository;

pub use model::FonteRendaDB;
pub use repository::FonteRendaRepository;
