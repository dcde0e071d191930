use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::library::{CollectionBackend, StorageResult};
use crate::models::{CollectionEntry, CollectionProgress, MangaId, ReadingStatus};

/// Non-durable backend, for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryCollection {
    entries: RwLock<BTreeMap<MangaId, CollectionEntry>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionBackend for MemoryCollection {
    async fn insert_if_absent(&self, entry: CollectionEntry) -> StorageResult<bool> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.manga_id) {
            return Ok(false);
        }
        entries.insert(entry.manga_id, entry);
        Ok(true)
    }

    async fn list(&self, status: Option<ReadingStatus>) -> StorageResult<Vec<CollectionEntry>> {
        let entries = self.entries.read().await;
        // BTreeMap iterates by id, so the stable sort leaves equal titles in id order.
        let mut list: Vec<CollectionEntry> = entries
            .values()
            .filter(|entry| status.map_or(true, |status| entry.status == status))
            .cloned()
            .collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(list)
    }

    async fn get(&self, manga_id: MangaId) -> StorageResult<Option<CollectionEntry>> {
        Ok(self.entries.read().await.get(&manga_id).cloned())
    }

    async fn set_status(&self, manga_id: MangaId, status: ReadingStatus) -> StorageResult<bool> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&manga_id) {
            Some(entry) => {
                entry.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_progress(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
    ) -> StorageResult<bool> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&manga_id) {
            Some(entry) => {
                entry.volumes_bought = progress.volumes_bought;
                entry.current_volume = progress.current_volume;
                entry.completed = progress.completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_progress_and_status(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<bool> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&manga_id) {
            Some(entry) => {
                entry.volumes_bought = progress.volumes_bought;
                entry.current_volume = progress.current_volume;
                entry.completed = progress.completed;
                entry.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, manga_id: MangaId) -> StorageResult<bool> {
        Ok(self.entries.write().await.remove(&manga_id).is_some())
    }
}
