use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Demographic, Genre, Theme};

pub type MangaId = i64;

/// A catalog series. Built from API responses and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manga {
    pub id: MangaId,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub main_picture: Option<String>,
    pub synopsis: String,
    pub background: Option<String>,
    pub score: f64,
    pub status: MangaStatus,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub genres: Vec<Genre>,
    pub themes: Vec<Theme>,
    pub demographics: Vec<Demographic>,
    pub authors: Vec<Author>,
}

impl Manga {
    /// Japanese title wrapped in parentheses, or an empty string.
    pub fn formatted_japanese_title(&self) -> String {
        self.title_japanese
            .as_ref()
            .map(|title| format!("({})", title))
            .unwrap_or_default()
    }

    pub fn formatted_english_title(&self) -> String {
        self.title_english
            .as_ref()
            .map(|title| format!("({})", title))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Author {
    pub id: String,
    pub full_name: String,
    pub role: AuthorRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorRole {
    #[serde(rename = "Art")]
    Art,
    #[serde(rename = "Story & Art")]
    StoryAndArt,
    #[serde(rename = "Story")]
    Story,
    #[serde(rename = "None", other)]
    Unknown,
}

/// Publication status as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MangaStatus {
    #[serde(rename = "discontinued")]
    Discontinued,
    #[serde(rename = "on_hiatus")]
    OnHiatus,
    #[serde(rename = "currently_publishing")]
    Publishing,
    #[serde(rename = "finished")]
    Finished,
    #[serde(rename = "none", other)]
    Unknown,
}

impl MangaStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            MangaStatus::Discontinued => "Discontinued",
            MangaStatus::OnHiatus => "On hiatus",
            MangaStatus::Publishing => "Publishing",
            MangaStatus::Finished => "Finished",
            MangaStatus::Unknown => "Unknown",
        }
    }
}
