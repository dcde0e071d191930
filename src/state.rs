use std::sync::Arc;

use crate::cache::MangaCache;
use crate::catalog::CatalogRepository;
use crate::coordinators::{GeneralCoordinator, LibraryCoordinator, SearchCoordinator};
use crate::library::CollectionStore;

#[derive(Clone)]
pub struct AppState {
    pub general: Arc<GeneralCoordinator>,
    pub search: Arc<SearchCoordinator>,
    pub library: Arc<LibraryCoordinator>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        store: CollectionStore,
        cache: Arc<MangaCache>,
        items_per_page: u32,
    ) -> Self {
        Self {
            general: Arc::new(GeneralCoordinator::new(repository.clone(), items_per_page)),
            search: Arc::new(SearchCoordinator::new(repository.clone(), items_per_page)),
            library: Arc::new(LibraryCoordinator::new(store, repository, cache)),
        }
    }
}
