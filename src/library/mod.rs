//! The user's persisted manga library.

pub mod backend;
pub mod memory;
pub mod sqlite;

use std::sync::Arc;
use thiserror::Error;

use crate::models::{CollectionEntry, CollectionProgress, Manga, MangaId, ReadingStatus};

pub use backend::CollectionBackend;
pub use memory::MemoryCollection;
pub use sqlite::SqliteCollection;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("corrupt collection entry: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Status a library entry should be saved with: a collected series read up
/// to its last volume becomes completed.
pub fn resolve_status(
    current_volume: u32,
    total_volumes: Option<u32>,
    status: ReadingStatus,
) -> ReadingStatus {
    match total_volumes {
        Some(total) if current_volume == total && status == ReadingStatus::Collected => {
            ReadingStatus::Completed
        }
        _ => status,
    }
}

/// Entry point for every library read and write.
///
/// Holds no cache: each call reflects what the backend has stored at that
/// moment. Concurrent updates to the same entry are last-write-wins.
#[derive(Clone)]
pub struct CollectionStore {
    backend: Arc<dyn CollectionBackend>,
}

impl CollectionStore {
    pub fn new(backend: Arc<dyn CollectionBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCollection::new()))
    }

    /// Adds `manga` with zeroed progress. Does nothing if it is already in
    /// the library.
    pub async fn add(&self, manga: &Manga, status: ReadingStatus) -> StorageResult<()> {
        let entry = CollectionEntry {
            manga_id: manga.id,
            title: manga.title.clone(),
            cover_url: manga.main_picture.clone(),
            volumes_bought: 0,
            total_volumes: manga.volumes,
            current_volume: 0,
            completed: false,
            status,
        };

        if self.backend.insert_if_absent(entry).await? {
            tracing::info!("Added '{}' ({}) to library as {}", manga.title, manga.id, status);
        } else {
            tracing::debug!("Manga {} already in library, add ignored", manga.id);
        }
        Ok(())
    }

    /// All entries ordered by title.
    pub async fn fetch_all(&self) -> StorageResult<Vec<CollectionEntry>> {
        self.backend.list(None).await
    }

    pub async fn fetch_by_status(&self, status: ReadingStatus) -> StorageResult<Vec<CollectionEntry>> {
        self.backend.list(Some(status)).await
    }

    pub async fn get(&self, manga_id: MangaId) -> StorageResult<Option<CollectionEntry>> {
        self.backend.get(manga_id).await
    }

    pub async fn is_in_library(&self, manga_id: MangaId) -> StorageResult<bool> {
        Ok(self.backend.get(manga_id).await?.is_some())
    }

    pub async fn update_status(&self, manga_id: MangaId, status: ReadingStatus) -> StorageResult<()> {
        if self.backend.set_status(manga_id, status).await? {
            tracing::debug!("Manga {} status set to {}", manga_id, status);
        }
        Ok(())
    }

    /// Overwrites all progress fields. Values are stored as given.
    pub async fn update_progress(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
    ) -> StorageResult<()> {
        if self.backend.set_progress(manga_id, progress).await? {
            tracing::debug!(
                "Manga {} progress set to {} bought, volume {}, completed={}",
                manga_id,
                progress.volumes_bought,
                progress.current_volume,
                progress.completed
            );
        }
        Ok(())
    }

    /// Overwrites progress and status together. Values are stored as given.
    pub async fn update_entry(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<()> {
        if self
            .backend
            .set_progress_and_status(manga_id, progress, status)
            .await?
        {
            tracing::debug!(
                "Manga {} saved as {} with {} bought, volume {}",
                manga_id,
                status,
                progress.volumes_bought,
                progress.current_volume
            );
        }
        Ok(())
    }

    pub async fn remove(&self, manga_id: MangaId) -> StorageResult<()> {
        if self.backend.delete(manga_id).await? {
            tracing::info!("Removed manga {} from library", manga_id);
        }
        Ok(())
    }
}
