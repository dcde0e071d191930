//! Wire shapes of the catalog API and their mapping into the domain model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{
    Author, AuthorRole, Demographic, Genre, Manga, MangaId, MangaPage, MangaStatus,
    PaginationMetadata, Theme,
};

#[derive(Debug, Deserialize)]
pub struct MangaListResponse {
    pub items: Vec<MangaDto>,
    pub metadata: MetadataDto,
}

#[derive(Debug, Deserialize)]
pub struct MetadataDto {
    pub total: u32,
    pub page: u32,
    pub per: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenreDto {
    pub id: String,
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeDto {
    pub id: String,
    pub theme: String,
}

#[derive(Debug, Deserialize)]
pub struct DemographicDto {
    pub id: String,
    pub demographic: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthorDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AuthorRole,
}

#[derive(Debug, Deserialize)]
pub struct MangaDto {
    pub id: MangaId,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub main_picture: Option<String>,
    // The API spells it this way.
    pub sypnosis: Option<String>,
    pub background: Option<String>,
    pub score: f64,
    pub status: MangaStatus,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub themes: Vec<ThemeDto>,
    #[serde(default)]
    pub demographics: Vec<DemographicDto>,
    #[serde(default)]
    pub authors: Vec<AuthorDto>,
}

impl From<MangaDto> for Manga {
    fn from(dto: MangaDto) -> Self {
        Manga {
            id: dto.id,
            title: dto.title,
            title_english: dto.title_english,
            title_japanese: dto.title_japanese,
            main_picture: dto.main_picture.as_deref().map(clean_url),
            synopsis: dto.sypnosis.unwrap_or_default(),
            background: dto.background,
            score: dto.score,
            status: dto.status,
            chapters: dto.chapters,
            volumes: dto.volumes,
            start_date: dto.start_date.as_deref().and_then(parse_date),
            end_date: dto.end_date.as_deref().and_then(parse_date),
            url: dto.url.as_deref().map(clean_url),
            genres: dto.genres.iter().filter_map(|g| Genre::from_name(&g.genre)).collect(),
            themes: dto.themes.iter().filter_map(|t| Theme::from_name(&t.theme)).collect(),
            demographics: dto
                .demographics
                .iter()
                .filter_map(|d| Demographic::from_name(&d.demographic))
                .collect(),
            authors: dto.authors.into_iter().map(Author::from).collect(),
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author {
            full_name: format!("{} {}", dto.first_name, dto.last_name),
            id: dto.id,
            role: dto.role,
        }
    }
}

impl From<MetadataDto> for PaginationMetadata {
    fn from(dto: MetadataDto) -> Self {
        PaginationMetadata::new(dto.total, dto.page, dto.per)
    }
}

impl From<MangaListResponse> for MangaPage {
    fn from(response: MangaListResponse) -> Self {
        MangaPage {
            mangas: response.items.into_iter().map(Manga::from).collect(),
            metadata: response.metadata.into(),
        }
    }
}

/// The catalog sometimes returns URLs wrapped in escaped quotes.
fn clean_url(raw: &str) -> String {
    raw.replace(['\\', '"'], "")
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
