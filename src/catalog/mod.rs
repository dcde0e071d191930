pub mod dto;
pub mod http_client;
pub mod network;
pub mod repository;

pub use network::HttpCatalog;
pub use repository::{CatalogRepository, NetworkError, NetworkResult};
