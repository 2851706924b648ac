pub mod model;
pub mod repository;

pub use model::LancamentoDB;
pub use repository::LancamentoRepository;
