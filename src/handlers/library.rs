use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::coordinators::LibraryStats;
use crate::models::{CollectionEntry, CollectionProgress, MangaId, ReadingStatus};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[derive(Deserialize)]
pub struct LibraryFilter {
    pub status: Option<String>,
}

pub async fn list_library(
    State(state): State<AppState>,
    Query(filter): Query<LibraryFilter>,
) -> Result<Json<ApiResponse<Vec<CollectionEntry>>>, ApiError> {
    let status = filter
        .status
        .map(|status| status.parse::<ReadingStatus>())
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let entries = match status {
        Some(status) => state.library.fetch_by_status(status).await?,
        None => {
            state.library.load_collection().await?;
            state.library.collection()
        }
    };

    Ok(Json(ApiResponse::ok(entries)))
}

pub async fn library_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LibraryStats>>, ApiError> {
    state.library.load_collection().await?;
    Ok(Json(ApiResponse::ok(state.library.stats())))
}

#[derive(Deserialize)]
pub struct AddEntry {
    pub manga_id: MangaId,
    pub status: Option<ReadingStatus>,
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<AddEntry>,
) -> Result<Json<ApiResponse<CollectionEntry>>, ApiError> {
    let manga = state.library.load_manga(payload.manga_id).await?;
    state
        .library
        .add_manga(&manga, payload.status.unwrap_or_default())
        .await?;

    match state.library.store().get(payload.manga_id).await? {
        Some(entry) => Ok(Json(ApiResponse::ok(entry))),
        None => Err(ApiError::Internal("Entry missing after insert".into())),
    }
}

#[derive(Serialize)]
pub struct Existence {
    pub existing: bool,
}

pub async fn check_entry(
    State(state): State<AppState>,
    Path(id): Path<MangaId>,
) -> Json<ApiResponse<Existence>> {
    Json(ApiResponse::ok(Existence {
        existing: state.library.is_in_library(id).await,
    }))
}

#[derive(Deserialize)]
pub struct UpdateEntry {
    pub volumes_bought: u32,
    pub current_volume: u32,
    pub completed: bool,
    pub status: ReadingStatus,
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<MangaId>,
    Json(payload): Json<UpdateEntry>,
) -> Result<Json<ApiResponse<CollectionEntry>>, ApiError> {
    let progress = CollectionProgress {
        volumes_bought: payload.volumes_bought,
        current_volume: payload.current_volume,
        completed: payload.completed,
    };

    match state.library.save_progress(id, progress, payload.status).await? {
        Some(entry) => Ok(Json(ApiResponse::ok(entry))),
        None => Err(ApiError::NotFound("Manga not in library".into())),
    }
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<MangaId>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if state.library.store().get(id).await?.is_none() {
        return Err(ApiError::NotFound("Manga not in library".into()));
    }

    state.library.remove_manga(id).await?;
    Ok(Json(ApiResponse::empty()))
}
