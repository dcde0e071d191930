use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::cache::MangaCache;
use crate::catalog::{CatalogRepository, NetworkResult};
use crate::coordinators::{ErrorMessage, InFlight};
use crate::library::{resolve_status, CollectionStore, StorageResult};
use crate::models::{CollectionEntry, CollectionProgress, Manga, MangaId, ReadingStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub total_mangas: usize,
    pub total_volumes_owned: u64,
    pub by_status: BTreeMap<ReadingStatus, usize>,
}

/// Library screen: keeps an in-memory copy of the collection, refreshed
/// from the store after every change.
pub struct LibraryCoordinator {
    store: CollectionStore,
    repository: Arc<dyn CatalogRepository>,
    cache: Arc<MangaCache>,
    collection: RwLock<Vec<CollectionEntry>>,
    loads_in_flight: AtomicUsize,
    error: ErrorMessage,
}

impl LibraryCoordinator {
    pub fn new(
        store: CollectionStore,
        repository: Arc<dyn CatalogRepository>,
        cache: Arc<MangaCache>,
    ) -> Self {
        Self {
            store,
            repository,
            cache,
            collection: RwLock::new(Vec::new()),
            loads_in_flight: AtomicUsize::new(0),
            error: ErrorMessage::default(),
        }
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn collection(&self) -> Vec<CollectionEntry> {
        self.collection.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loads_in_flight.load(Ordering::Acquire) > 0
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.get()
    }

    pub fn by_status(&self) -> BTreeMap<ReadingStatus, Vec<CollectionEntry>> {
        let mut grouped: BTreeMap<ReadingStatus, Vec<CollectionEntry>> = BTreeMap::new();
        for entry in self.collection() {
            grouped.entry(entry.status).or_default().push(entry);
        }
        grouped
    }

    pub fn total_mangas(&self) -> usize {
        self.read_collection().len()
    }

    pub fn total_volumes_owned(&self) -> u64 {
        self.read_collection()
            .iter()
            .map(|entry| u64::from(entry.volumes_bought))
            .sum()
    }

    pub fn count(&self, status: ReadingStatus) -> usize {
        self.read_collection()
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            total_mangas: self.total_mangas(),
            total_volumes_owned: self.total_volumes_owned(),
            by_status: ReadingStatus::ALL
                .into_iter()
                .map(|status| (status, self.count(status)))
                .collect(),
        }
    }

    /// Snapshot-only membership check, no I/O.
    pub fn contains(&self, manga_id: MangaId) -> bool {
        self.read_collection()
            .iter()
            .any(|entry| entry.manga_id == manga_id)
    }

    /// Store-backed membership check. Storage failures read as "not in library".
    pub async fn is_in_library(&self, manga_id: MangaId) -> bool {
        match self.store.is_in_library(manga_id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("Library lookup for manga {} failed: {}", manga_id, e);
                false
            }
        }
    }

    pub fn resolve_status(
        &self,
        current_volume: u32,
        total_volumes: Option<u32>,
        status: ReadingStatus,
    ) -> ReadingStatus {
        resolve_status(current_volume, total_volumes, status)
    }

    pub async fn load_collection(&self) -> StorageResult<()> {
        let _in_flight = InFlight::enter(&self.loads_in_flight);
        self.error.clear();

        match self.store.fetch_all().await {
            Ok(entries) => {
                *self.collection.write().unwrap_or_else(PoisonError::into_inner) = entries;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Entries with `status`, read straight from the store.
    pub async fn fetch_by_status(&self, status: ReadingStatus) -> StorageResult<Vec<CollectionEntry>> {
        self.store.fetch_by_status(status).await.map_err(|e| self.fail(e))
    }

    pub async fn add_manga(&self, manga: &Manga, status: ReadingStatus) -> StorageResult<()> {
        self.store.add(manga, status).await.map_err(|e| self.fail(e))?;
        self.load_collection().await
    }

    /// Removes the entry and drops it from the snapshot without a reload.
    /// Its cached catalog record is dropped too.
    pub async fn remove_manga(&self, manga_id: MangaId) -> StorageResult<()> {
        self.store.remove(manga_id).await.map_err(|e| self.fail(e))?;
        self.cache.invalidate(manga_id).await;
        self.collection
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|entry| entry.manga_id != manga_id);
        Ok(())
    }

    pub async fn update_status(&self, manga_id: MangaId, status: ReadingStatus) -> StorageResult<()> {
        self.store
            .update_status(manga_id, status)
            .await
            .map_err(|e| self.fail(e))?;
        self.load_collection().await
    }

    /// Writes progress and status in one store call, then reloads.
    pub async fn save_collection(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<()> {
        self.store
            .update_entry(manga_id, progress, status)
            .await
            .map_err(|e| self.fail(e))?;
        self.load_collection().await
    }

    /// Saves progress capped at the entry's total volumes, with `status`
    /// passed through [`resolve_status`]. Returns the saved entry, or `None`
    /// if it is not in the library.
    pub async fn save_progress(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<Option<CollectionEntry>> {
        let Some(entry) = self.store.get(manga_id).await.map_err(|e| self.fail(e))? else {
            return Ok(None);
        };

        let progress = progress.clamped(entry.total_volumes);
        let status = resolve_status(progress.current_volume, entry.total_volumes, status);
        self.save_collection(manga_id, progress, status).await?;
        self.store.get(manga_id).await.map_err(|e| self.fail(e))
    }

    /// Full catalog record for a library entry, served from cache when fresh.
    pub async fn load_manga(&self, manga_id: MangaId) -> NetworkResult<Manga> {
        if let Some(manga) = self.cache.get(manga_id).await {
            return Ok(manga);
        }

        match self.repository.get_manga_by_id(manga_id).await {
            Ok(manga) => {
                self.cache.set(manga.clone()).await;
                Ok(manga)
            }
            Err(e) => {
                self.error.set(&e);
                Err(e)
            }
        }
    }

    fn read_collection(&self) -> std::sync::RwLockReadGuard<'_, Vec<CollectionEntry>> {
        self.collection.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn fail<E: std::fmt::Display>(&self, error: E) -> E {
        tracing::warn!("Library operation failed: {}", error);
        self.error.set(&error);
        error
    }
}
