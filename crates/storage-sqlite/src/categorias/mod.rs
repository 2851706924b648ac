pub mod model;
pub mod repository;

pub use model::CategoriaDB;
pub use repository::CategoriaRepository;
