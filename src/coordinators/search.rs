use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::{CatalogRepository, NetworkResult};
use crate::coordinators::{ErrorMessage, LoadOutcome, LoadingGuard};
use crate::models::{DemographicFilter, Genre, Manga, MangaId, PaginationMetadata};
use crate::pagination::{FilterConfig, PaginationController};

/// Shorter search text is kept but not sent to the catalog.
pub const MIN_SEARCH_LENGTH: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub search_text: String,
    pub demographic: DemographicFilter,
    pub genre: Option<Genre>,
}

impl SearchFilters {
    fn search_query(&self) -> Option<String> {
        let text = self.search_text.trim();
        (text.chars().count() >= MIN_SEARCH_LENGTH).then(|| text.to_string())
    }

    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            genre: self.genre,
            demographic: self.demographic,
            search_query: self.search_query(),
        }
    }
}

/// Search screen: title search, demographic and genre filters, infinite scroll.
pub struct SearchCoordinator {
    repository: Arc<dyn CatalogRepository>,
    pagination: PaginationController,
    filters: RwLock<SearchFilters>,
    applied: RwLock<FilterConfig>,
    is_loading: AtomicBool,
    error: ErrorMessage,
}

impl SearchCoordinator {
    pub fn new(repository: Arc<dyn CatalogRepository>, items_per_page: u32) -> Self {
        Self {
            repository,
            pagination: PaginationController::new(items_per_page),
            filters: RwLock::new(SearchFilters::default()),
            applied: RwLock::new(FilterConfig::default()),
            is_loading: AtomicBool::new(false),
            error: ErrorMessage::default(),
        }
    }

    pub fn filters(&self) -> SearchFilters {
        self.filters.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn mangas(&self) -> Vec<Manga> {
        self.pagination.mangas()
    }

    pub fn metadata(&self) -> Option<PaginationMetadata> {
        self.pagination.metadata()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.get()
    }

    /// Loaded mangas narrowed to the active demographic.
    pub fn filtered_mangas(&self) -> Vec<Manga> {
        let demographic = self.filters().demographic;
        self.pagination
            .mangas()
            .into_iter()
            .filter(|manga| demographic.matches(&manga.demographics))
            .collect()
    }

    /// Up to `limit` genres of `manga`, the active genre filter first.
    pub fn display_genres(&self, manga: &Manga, limit: usize) -> Vec<Genre> {
        let Some(active) = self.filters().genre else {
            return manga.genres.iter().copied().take(limit).collect();
        };

        let mut genres = Vec::with_capacity(limit);
        if limit > 0 && manga.genres.contains(&active) {
            genres.push(active);
        }
        let remaining = limit.saturating_sub(genres.len());
        genres.extend(
            manga
                .genres
                .iter()
                .copied()
                .filter(|genre| *genre != active)
                .take(remaining),
        );
        genres
    }

    pub async fn filter_by_demographic(&self, demographic: DemographicFilter) -> NetworkResult<LoadOutcome> {
        self.reload(|filters| filters.demographic = demographic).await
    }

    pub async fn filter_by_genre(&self, genre: Option<Genre>) -> NetworkResult<LoadOutcome> {
        self.reload(|filters| filters.genre = genre).await
    }

    /// Stores the text; reloads only once it is long enough to search or
    /// has been cleared. Turned away untouched while a load is running.
    pub async fn set_search_text(&self, text: &str) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.update_filters(|filters| filters.search_text = text.to_string());

        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.chars().count() < MIN_SEARCH_LENGTH {
            return Ok(LoadOutcome::NothingToLoad);
        }
        self.pagination.reset();
        self.load_first_page().await
    }

    /// Replaces every filter at once and reloads.
    pub async fn apply_filters(&self, filters: SearchFilters) -> NetworkResult<LoadOutcome> {
        self.reload(|current| *current = filters).await
    }

    pub async fn load_mangas(&self) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.load_first_page().await
    }

    /// Loads the page after the current results, under the filters those
    /// results were loaded with.
    pub async fn load_next_page(&self) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.error.clear();

        let filter = self.applied.read().unwrap_or_else(PoisonError::into_inner).clone();
        match self
            .pagination
            .load_next_page(self.repository.as_ref(), &filter)
            .await
        {
            Ok(Some(_)) => Ok(LoadOutcome::Loaded),
            Ok(None) => Ok(LoadOutcome::NothingToLoad),
            Err(e) => {
                self.error.set(&e);
                Err(e)
            }
        }
    }

    /// Loads the next page when `manga_id` is the last item shown.
    pub async fn load_next_page_if_needed(&self, manga_id: MangaId) -> NetworkResult<LoadOutcome> {
        if self.pagination.last_manga_id() != Some(manga_id) {
            return Ok(LoadOutcome::NothingToLoad);
        }
        self.load_next_page().await
    }

    pub async fn retry(&self) -> NetworkResult<LoadOutcome> {
        self.reload(|_| {}).await
    }

    /// Applies `change` to the filters, resets and loads page 1, all while
    /// holding the loading flag. Returns `Busy` with nothing changed if
    /// another load holds it.
    async fn reload(&self, change: impl FnOnce(&mut SearchFilters)) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.update_filters(change);
        self.pagination.reset();
        self.load_first_page().await
    }

    async fn load_first_page(&self) -> NetworkResult<LoadOutcome> {
        self.error.clear();

        let filter = self.filters().to_filter_config();
        match self
            .pagination
            .load_initial_page(self.repository.as_ref(), &filter)
            .await
        {
            Ok(_) => {
                *self.applied.write().unwrap_or_else(PoisonError::into_inner) = filter;
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                self.error.set(&e);
                Err(e)
            }
        }
    }

    fn update_filters(&self, apply: impl FnOnce(&mut SearchFilters)) {
        let mut filters = self.filters.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut filters);
    }
}
