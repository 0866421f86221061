pub mod repository;
pub mod service;

pub use repository::VillaRepository;
pub use service::VillaService;
