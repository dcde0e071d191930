use async_trait::async_trait;

use crate::library::StorageResult;
use crate::models::{CollectionEntry, CollectionProgress, MangaId, ReadingStatus};

/// Storage seam behind [`CollectionStore`](crate::library::CollectionStore).
///
/// Listings are ordered by title, ties broken by manga id. Mutations report
/// whether an entry was touched.
#[async_trait]
pub trait CollectionBackend: Send + Sync {
    /// Inserts `entry` unless one with the same manga id exists.
    async fn insert_if_absent(&self, entry: CollectionEntry) -> StorageResult<bool>;

    async fn list(&self, status: Option<ReadingStatus>) -> StorageResult<Vec<CollectionEntry>>;

    async fn get(&self, manga_id: MangaId) -> StorageResult<Option<CollectionEntry>>;

    async fn set_status(&self, manga_id: MangaId, status: ReadingStatus) -> StorageResult<bool>;

    async fn set_progress(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
    ) -> StorageResult<bool>;

    /// Writes progress and status as one change: both land or neither does.
    async fn set_progress_and_status(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<bool>;

    async fn delete(&self, manga_id: MangaId) -> StorageResult<bool>;
}
