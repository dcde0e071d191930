use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::library::{CollectionBackend, StorageError, StorageResult};
use crate::models::{CollectionEntry, CollectionProgress, MangaId, ReadingStatus};

const SELECT_ENTRY: &str = "SELECT manga_id, title, cover_url, volumes_bought, total_volumes, current_volume, completed, status FROM collection_entry";

#[derive(Debug, FromRow)]
struct CollectionRow {
    manga_id: i64,
    title: String,
    cover_url: Option<String>,
    volumes_bought: i64,
    total_volumes: Option<i64>,
    current_volume: i64,
    completed: bool,
    status: String,
}

impl TryFrom<CollectionRow> for CollectionEntry {
    type Error = StorageError;

    fn try_from(row: CollectionRow) -> Result<Self, Self::Error> {
        let counter = |name: &str, value: i64| {
            u32::try_from(value).map_err(|_| {
                StorageError::Corrupt(format!("manga {}: {} = {}", row.manga_id, name, value))
            })
        };

        Ok(CollectionEntry {
            manga_id: row.manga_id,
            volumes_bought: counter("volumes_bought", row.volumes_bought)?,
            total_volumes: row
                .total_volumes
                .map(|total| counter("total_volumes", total))
                .transpose()?,
            current_volume: counter("current_volume", row.current_volume)?,
            completed: row.completed,
            status: row
                .status
                .parse()
                .map_err(|e| StorageError::Corrupt(format!("manga {}: {}", row.manga_id, e)))?,
            title: row.title,
            cover_url: row.cover_url,
        })
    }
}

/// Durable backend over the `collection_entry` table.
pub struct SqliteCollection {
    pool: SqlitePool,
}

impl SqliteCollection {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionBackend for SqliteCollection {
    async fn insert_if_absent(&self, entry: CollectionEntry) -> StorageResult<bool> {
        let result = sqlx::query(
            "INSERT INTO collection_entry (manga_id, title, cover_url, volumes_bought, total_volumes, current_volume, completed, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(manga_id) DO NOTHING",
        )
        .bind(entry.manga_id)
        .bind(&entry.title)
        .bind(&entry.cover_url)
        .bind(i64::from(entry.volumes_bought))
        .bind(entry.total_volumes.map(i64::from))
        .bind(i64::from(entry.current_volume))
        .bind(entry.completed)
        .bind(entry.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, status: Option<ReadingStatus>) -> StorageResult<Vec<CollectionEntry>> {
        let rows = match status {
            Some(status) => {
                let query = format!("{} WHERE status = ? ORDER BY title, manga_id", SELECT_ENTRY);
                sqlx::query_as::<_, CollectionRow>(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY title, manga_id", SELECT_ENTRY);
                sqlx::query_as::<_, CollectionRow>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(CollectionEntry::try_from).collect()
    }

    async fn get(&self, manga_id: MangaId) -> StorageResult<Option<CollectionEntry>> {
        let query = format!("{} WHERE manga_id = ?", SELECT_ENTRY);
        let row = sqlx::query_as::<_, CollectionRow>(&query)
            .bind(manga_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(CollectionEntry::try_from).transpose()
    }

    async fn set_status(&self, manga_id: MangaId, status: ReadingStatus) -> StorageResult<bool> {
        let result = sqlx::query("UPDATE collection_entry SET status = ? WHERE manga_id = ?")
            .bind(status.as_str())
            .bind(manga_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_progress(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
    ) -> StorageResult<bool> {
        let result = sqlx::query(
            "UPDATE collection_entry SET volumes_bought = ?, current_volume = ?, completed = ? WHERE manga_id = ?",
        )
        .bind(i64::from(progress.volumes_bought))
        .bind(i64::from(progress.current_volume))
        .bind(progress.completed)
        .bind(manga_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_progress_and_status(
        &self,
        manga_id: MangaId,
        progress: CollectionProgress,
        status: ReadingStatus,
    ) -> StorageResult<bool> {
        let result = sqlx::query(
            "UPDATE collection_entry SET volumes_bought = ?, current_volume = ?, completed = ?, status = ? WHERE manga_id = ?",
        )
        .bind(i64::from(progress.volumes_bought))
        .bind(i64::from(progress.current_volume))
        .bind(progress.completed)
        .bind(status.as_str())
        .bind(manga_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, manga_id: MangaId) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM collection_entry WHERE manga_id = ?")
            .bind(manga_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
