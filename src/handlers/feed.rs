use axum::{extract::State, Json};
use serde::Serialize;

use crate::coordinators::{GeneralCoordinator, LoadOutcome};
use crate::models::{Manga, PaginationMetadata};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[derive(Serialize)]
pub struct FeedView {
    pub outcome: Option<LoadOutcome>,
    pub mangas: Vec<Manga>,
    pub metadata: Option<PaginationMetadata>,
    pub has_more_pages: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub top_five: Vec<Manga>,
    pub recent: Vec<Manga>,
}

impl FeedView {
    fn from_coordinator(general: &GeneralCoordinator, outcome: Option<LoadOutcome>) -> Self {
        let metadata = general.metadata();
        FeedView {
            outcome,
            mangas: general.mangas(),
            metadata,
            has_more_pages: metadata.is_some_and(|m| m.has_more_pages()),
            is_loading: general.is_loading(),
            error_message: general.error_message(),
            top_five: general.top_five(),
            recent: general.recent(),
        }
    }
}

pub async fn get_feed(State(state): State<AppState>) -> Json<ApiResponse<FeedView>> {
    Json(ApiResponse::ok(FeedView::from_coordinator(&state.general, None)))
}

pub async fn load_feed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FeedView>>, ApiError> {
    let outcome = state.general.load_mangas().await?;
    Ok(Json(ApiResponse::ok(FeedView::from_coordinator(&state.general, Some(outcome)))))
}

pub async fn next_feed_page(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FeedView>>, ApiError> {
    let outcome = state.general.load_next_page().await?;
    Ok(Json(ApiResponse::ok(FeedView::from_coordinator(&state.general, Some(outcome)))))
}

pub async fn retry_feed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FeedView>>, ApiError> {
    let outcome = state.general.retry().await?;
    Ok(Json(ApiResponse::ok(FeedView::from_coordinator(&state.general, Some(outcome)))))
}
