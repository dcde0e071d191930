use moka::future::Cache;
use std::time::Duration;

use crate::models::{Manga, MangaId};

/// Time-bounded cache of catalog records looked up by id.
pub struct MangaCache {
    cache: Cache<MangaId, Manga>,
}

impl MangaCache {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub async fn get(&self, id: MangaId) -> Option<Manga> {
        self.cache.get(&id).await
    }

    pub async fn set(&self, manga: Manga) {
        self.cache.insert(manga.id, manga).await;
    }

    pub async fn invalidate(&self, id: MangaId) {
        self.cache.invalidate(&id).await;
    }
}

impl Default for MangaCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(60 * 60))
    }
}
