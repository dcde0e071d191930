use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::catalog::dto::{MangaDto, MangaListResponse};
use crate::catalog::http_client::create_client;
use crate::catalog::repository::{CatalogRepository, NetworkError, NetworkResult};
use crate::models::{Demographic, Genre, Manga, MangaId, MangaPage};

/// Catalog backed by the public manga REST API.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self::with_client(create_client(timeout)?, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, path: &str, page: u32, per_page: u32) -> String {
        format!("{}{}?page={}&per={}", self.base_url, path, page, per_page)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> NetworkResult<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_send_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(NetworkError::General)?;
        if body.is_empty() {
            return Err(NetworkError::InvalidData);
        }

        serde_json::from_slice(&body).map_err(NetworkError::Json)
    }
}

fn map_send_error(error: reqwest::Error) -> NetworkError {
    if error.is_builder() {
        NetworkError::NonHttp(error.to_string())
    } else {
        NetworkError::General(error)
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[async_trait]
impl CatalogRepository for HttpCatalog {
    async fn get_mangas(
        &self,
        page: u32,
        per_page: u32,
        genre: Option<Genre>,
    ) -> NetworkResult<MangaPage> {
        let path = match genre {
            Some(genre) => format!("/list/mangaByGenre/{}", segment(genre.name())),
            None => "/list/bestMangas".to_string(),
        };
        let url = self.list_url(&path, page, per_page);
        let response: MangaListResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn get_mangas_by_demographic(
        &self,
        demographic: Demographic,
        page: u32,
        per_page: u32,
    ) -> NetworkResult<MangaPage> {
        let path = format!("/list/mangaByDemographic/{}", segment(demographic.name()));
        let url = self.list_url(&path, page, per_page);
        let response: MangaListResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn get_manga_by_id(&self, id: MangaId) -> NetworkResult<Manga> {
        let url = format!("{}/search/manga/{}", self.base_url, id);
        let dto: MangaDto = self.get_json(&url).await?;
        Ok(dto.into())
    }

    async fn search_mangas(
        &self,
        page: u32,
        per_page: u32,
        query: &str,
    ) -> NetworkResult<MangaPage> {
        let path = format!("/search/mangasContains/{}", segment(query));
        let url = self.list_url(&path, page, per_page);
        let response: MangaListResponse = self.get_json(&url).await?;
        Ok(response.into())
    }
}
