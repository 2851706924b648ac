pub mod model;
pub mod repository;

pub use model::UsuarioDB;
pub use repository::UsuarioRepository;
