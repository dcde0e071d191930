use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Demographic, Genre, Manga, MangaId, MangaPage};

/// Failures surfaced by the catalog. Messages are shown to the user as-is.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{0}")]
    General(#[source] reqwest::Error),
    #[error("HTTP status code: {0}")]
    Status(u16),
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),
    #[error("Invalid data received from server")]
    InvalidData,
    #[error("Request could not be sent as HTTP: {0}")]
    NonHttp(String),
}

impl NetworkError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Read-only access to the remote manga catalog.
///
/// Pages are 1-based; `per_page` is the requested page size.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Best-ranked mangas, optionally narrowed to one genre.
    async fn get_mangas(
        &self,
        page: u32,
        per_page: u32,
        genre: Option<Genre>,
    ) -> NetworkResult<MangaPage>;

    async fn get_mangas_by_demographic(
        &self,
        demographic: Demographic,
        page: u32,
        per_page: u32,
    ) -> NetworkResult<MangaPage>;

    async fn get_manga_by_id(&self, id: MangaId) -> NetworkResult<Manga>;

    /// Mangas whose title contains `query`.
    async fn search_mangas(
        &self,
        page: u32,
        per_page: u32,
        query: &str,
    ) -> NetworkResult<MangaPage>;
}
