use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::{CatalogRepository, NetworkResult};
use crate::coordinators::{ErrorMessage, LoadOutcome, LoadingGuard};
use crate::models::{Manga, PaginationMetadata};
use crate::pagination::{FilterConfig, PaginationController};

const TOP_COUNT: usize = 5;
const RECENT_COUNT: usize = 10;

/// Home feed: the unfiltered best-ranked list.
pub struct GeneralCoordinator {
    repository: Arc<dyn CatalogRepository>,
    pagination: PaginationController,
    is_loading: AtomicBool,
    error: ErrorMessage,
}

impl GeneralCoordinator {
    pub fn new(repository: Arc<dyn CatalogRepository>, items_per_page: u32) -> Self {
        Self {
            repository,
            pagination: PaginationController::new(items_per_page),
            is_loading: AtomicBool::new(false),
            error: ErrorMessage::default(),
        }
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

    /// Highest scored loaded mangas.
    pub fn top_five(&self) -> Vec<Manga> {
        let mut mangas = self.pagination.mangas();
        mangas.sort_by(|a, b| b.score.total_cmp(&a.score));
        mangas.truncate(TOP_COUNT);
        mangas
    }

    /// Most recently started loaded mangas; undated ones are left out.
    pub fn recent(&self) -> Vec<Manga> {
        let mut mangas: Vec<Manga> = self
            .pagination
            .mangas()
            .into_iter()
            .filter(|manga| manga.start_date.is_some())
            .collect();
        mangas.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        mangas.truncate(RECENT_COUNT);
        mangas
    }

    pub async fn load_mangas(&self) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.load_first_page().await
    }

    /// Drops everything loaded so far and starts again from page 1.
    pub async fn retry(&self) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.pagination.reset();
        self.load_first_page().await
    }

    pub async fn load_next_page(&self) -> NetworkResult<LoadOutcome> {
        let Some(_guard) = LoadingGuard::acquire(&self.is_loading) else {
            return Ok(LoadOutcome::Busy);
        };
        self.error.clear();

        match self
            .pagination
            .load_next_page(self.repository.as_ref(), &FilterConfig::default())
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

    async fn load_first_page(&self) -> NetworkResult<LoadOutcome> {
        self.error.clear();

        match self
            .pagination
            .load_initial_page(self.repository.as_ref(), &FilterConfig::default())
            .await
        {
            Ok(_) => Ok(LoadOutcome::Loaded),
            Err(e) => {
                self.error.set(&e);
                Err(e)
            }
        }
    }
}
