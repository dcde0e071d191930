#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use tankodex::catalog::{CatalogRepository, NetworkError, NetworkResult};
use tankodex::models::{
    Demographic, Genre, Manga, MangaId, MangaPage, MangaStatus, PaginationMetadata,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Best { page: u32, per_page: u32, genre: Option<Genre> },
    Demographic { demographic: Demographic, page: u32, per_page: u32 },
    Search { query: String, page: u32, per_page: u32 },
    ById(MangaId),
}

/// What the next catalog call does before answering.
pub enum Step {
    Fail(u16),
    /// Never answers.
    Stall,
    /// Waits for the notification, then answers normally.
    Gate(Arc<Notify>),
}

/// In-process catalog serving `total` generated mangas, with scripted
/// failures and delays.
pub struct ScriptedCatalog {
    total: u32,
    calls: Mutex<Vec<Call>>,
    steps: Mutex<VecDeque<Step>>,
}

impl ScriptedCatalog {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            calls: Mutex::new(Vec::new()),
            steps: Mutex::new(VecDeque::new()),
        }
    }

    pub fn script(&self, step: Step) {
        self.steps.lock().unwrap().push_back(step);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }

    async fn answer(&self, call: Call) -> NetworkResult<()> {
        self.calls.lock().unwrap().push(call);
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Fail(code)) => Err(NetworkError::Status(code)),
            Some(Step::Stall) => std::future::pending().await,
            Some(Step::Gate(notify)) => {
                notify.notified().await;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn page(&self, page: u32, per_page: u32) -> MangaPage {
        let first = (page - 1) * per_page + 1;
        let last = (page * per_page).min(self.total);
        MangaPage {
            mangas: (first..=last)
                .map(|id| generated_manga(id as MangaId))
                .collect(),
            metadata: PaginationMetadata::new(self.total, page, per_page),
        }
    }
}

#[async_trait]
impl CatalogRepository for ScriptedCatalog {
    async fn get_mangas(
        &self,
        page: u32,
        per_page: u32,
        genre: Option<Genre>,
    ) -> NetworkResult<MangaPage> {
        self.answer(Call::Best { page, per_page, genre }).await?;
        Ok(self.page(page, per_page))
    }

    async fn get_mangas_by_demographic(
        &self,
        demographic: Demographic,
        page: u32,
        per_page: u32,
    ) -> NetworkResult<MangaPage> {
        self.answer(Call::Demographic {
            demographic,
            page,
            per_page,
        })
        .await?;
        Ok(self.page(page, per_page))
    }

    async fn get_manga_by_id(&self, id: MangaId) -> NetworkResult<Manga> {
        self.answer(Call::ById(id)).await?;
        Ok(generated_manga(id))
    }

    async fn search_mangas(
        &self,
        page: u32,
        per_page: u32,
        query: &str,
    ) -> NetworkResult<MangaPage> {
        self.answer(Call::Search {
            query: query.to_string(),
            page,
            per_page,
        })
        .await?;
        Ok(self.page(page, per_page))
    }
}

/// Bare catalog record.
pub fn manga(id: MangaId, title: &str, volumes: Option<u32>) -> Manga {
    Manga {
        id,
        title: title.to_string(),
        title_english: None,
        title_japanese: None,
        main_picture: Some(format!("https://cdn.example.com/{}.jpg", id)),
        synopsis: String::new(),
        background: None,
        score: 0.0,
        status: MangaStatus::Finished,
        chapters: None,
        volumes,
        start_date: None,
        end_date: None,
        url: None,
        genres: vec![],
        themes: vec![],
        demographics: vec![],
        authors: vec![],
    }
}

/// Record served by [`ScriptedCatalog`]: even ids are shounen action
/// dramas, odd ids seinen dramas, and every third id has no start date.
pub fn generated_manga(id: MangaId) -> Manga {
    let mut manga = manga(id, &format!("Manga {:03}", id), Some(12));
    manga.score = (id % 100) as f64 / 10.0;
    if id % 2 == 0 {
        manga.genres = vec![Genre::Action, Genre::Drama];
        manga.demographics = vec![Demographic::Shounen];
    } else {
        manga.genres = vec![Genre::Drama];
        manga.demographics = vec![Demographic::Seinen];
    }
    if id % 3 != 0 {
        manga.start_date = Utc.timestamp_opt(1_000_000 * id, 0).single();
    }
    manga
}

pub fn ids(mangas: &[Manga]) -> Vec<MangaId> {
    mangas.iter().map(|manga| manga.id).collect()
}
