//! Cursor-based page accumulation over the catalog.
//!
//! State is only written after a fetch completes, so a load whose future is
//! dropped mid-flight leaves nothing behind. A failed `load_next_page` leaves
//! the cursor, sequence and metadata exactly as they were.
//!
//! Every `reset` and every applied initial page starts a new generation. A
//! next page fetched under an older generation is discarded on arrival.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{CatalogRepository, NetworkResult};
use crate::models::{Demographic, DemographicFilter, Genre, Manga, MangaId, MangaPage, PaginationMetadata};

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 20;

/// The filters a screen currently has applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub genre: Option<Genre>,
    pub demographic: DemographicFilter,
    pub search_query: Option<String>,
}

impl FilterConfig {
    pub fn genre(genre: Option<Genre>) -> Self {
        Self {
            genre,
            ..Self::default()
        }
    }

    /// Picks the single catalog query to issue: search beats demographic,
    /// demographic beats genre.
    pub fn resolve(&self) -> CatalogQuery {
        let search = self
            .search_query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty());

        if let Some(query) = search {
            return CatalogQuery::Search(query.to_string());
        }
        if let Some(demographic) = self.demographic.demographic() {
            return CatalogQuery::Demographic(demographic);
        }
        CatalogQuery::Genre(self.genre)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Search(String),
    Demographic(Demographic),
    Genre(Option<Genre>),
}

impl CatalogQuery {
    pub async fn fetch(
        &self,
        repository: &dyn CatalogRepository,
        page: u32,
        per_page: u32,
    ) -> NetworkResult<MangaPage> {
        match self {
            CatalogQuery::Search(query) => repository.search_mangas(page, per_page, query).await,
            CatalogQuery::Demographic(demographic) => {
                repository
                    .get_mangas_by_demographic(*demographic, page, per_page)
                    .await
            }
            CatalogQuery::Genre(genre) => repository.get_mangas(page, per_page, *genre).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub mangas: Vec<Manga>,
    pub metadata: Option<PaginationMetadata>,
    pub current_page: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            mangas: Vec::new(),
            metadata: None,
            current_page: 1,
        }
    }
}

struct Inner {
    state: PaginationState,
    generation: u64,
}

pub struct PaginationController {
    items_per_page: u32,
    inner: RwLock<Inner>,
}

impl PaginationController {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            inner: RwLock::new(Inner {
                state: PaginationState::default(),
                generation: 0,
            }),
        }
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Fetches page 1 and replaces the accumulated results with it.
    ///
    /// On failure the cursor is back at 1 but the previous results and
    /// metadata are kept. A page that arrives after a `reset` is dropped.
    pub async fn load_initial_page(
        &self,
        repository: &dyn CatalogRepository,
        filter: &FilterConfig,
    ) -> NetworkResult<PaginationMetadata> {
        let query = filter.resolve();
        let generation = self.read().generation;
        let result = query.fetch(repository, 1, self.items_per_page).await;

        let mut inner = self.write();
        if inner.generation != generation {
            tracing::debug!("Discarding page 1 for {:?}, pagination was reset", query);
            return result.map(|page| page.metadata);
        }
        inner.state.current_page = 1;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Initial page load failed for {:?}: {}", query, e);
                return Err(e);
            }
        };

        tracing::debug!(
            "Loaded page 1 for {:?}: {} item(s), {} total",
            query,
            page.mangas.len(),
            page.metadata.total
        );

        inner.generation += 1;
        inner.state.mangas = page.mangas;
        inner.state.metadata = Some(page.metadata);
        Ok(page.metadata)
    }

    /// Fetches the page after the cursor and appends it.
    ///
    /// Returns `Ok(None)` without fetching when nothing was loaded yet or the
    /// last page has been reached.
    pub async fn load_next_page(
        &self,
        repository: &dyn CatalogRepository,
        filter: &FilterConfig,
    ) -> NetworkResult<Option<PaginationMetadata>> {
        let (next_page, generation) = {
            let inner = self.read();
            match inner.state.metadata {
                Some(metadata) if metadata.has_more_pages() => {
                    (inner.state.current_page + 1, inner.generation)
                }
                _ => return Ok(None),
            }
        };

        let query = filter.resolve();
        let page = match query.fetch(repository, next_page, self.items_per_page).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    "Page {} load failed for {:?}, staying on page {}: {}",
                    next_page,
                    query,
                    next_page - 1,
                    e
                );
                return Err(e);
            }
        };

        let mut inner = self.write();
        if inner.generation != generation {
            tracing::debug!(
                "Discarding page {} for {:?}, pagination moved on while it loaded",
                next_page,
                query
            );
            return Ok(None);
        }

        tracing::debug!(
            "Loaded page {} for {:?}: {} item(s)",
            next_page,
            query,
            page.mangas.len()
        );

        inner.state.mangas.extend(page.mangas);
        inner.state.metadata = Some(page.metadata);
        inner.state.current_page = next_page;

        Ok(Some(page.metadata))
    }

    pub fn reset(&self) {
        let mut inner = self.write();
        inner.state = PaginationState::default();
        inner.generation += 1;
    }

    pub fn has_more_pages(&self) -> bool {
        self.read()
            .state
            .metadata
            .is_some_and(|metadata| metadata.has_more_pages())
    }

    pub fn snapshot(&self) -> PaginationState {
        self.read().state.clone()
    }

    pub fn mangas(&self) -> Vec<Manga> {
        self.read().state.mangas.clone()
    }

    pub fn metadata(&self) -> Option<PaginationMetadata> {
        self.read().state.metadata
    }

    pub fn current_page(&self) -> u32 {
        self.read().state.current_page
    }

    pub fn last_manga_id(&self) -> Option<MangaId> {
        self.read().state.mangas.last().map(|manga| manga.id)
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}
