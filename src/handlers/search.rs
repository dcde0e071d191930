use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::coordinators::{LoadOutcome, SearchCoordinator, SearchFilters};
use crate::models::{Manga, MangaId, PaginationMetadata};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[derive(Serialize)]
pub struct SearchView {
    pub outcome: Option<LoadOutcome>,
    pub filters: SearchFilters,
    pub mangas: Vec<Manga>,
    pub metadata: Option<PaginationMetadata>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl SearchView {
    fn from_coordinator(search: &SearchCoordinator, outcome: Option<LoadOutcome>) -> Self {
        SearchView {
            outcome,
            filters: search.filters(),
            mangas: search.filtered_mangas(),
            metadata: search.metadata(),
            is_loading: search.is_loading(),
            error_message: search.error_message(),
        }
    }
}

#[derive(Deserialize)]
pub struct NextPage {
    /// Last manga the client displayed; omitted means "load unconditionally".
    pub after: Option<MangaId>,
}

pub async fn get_search(State(state): State<AppState>) -> Json<ApiResponse<SearchView>> {
    Json(ApiResponse::ok(SearchView::from_coordinator(&state.search, None)))
}

pub async fn update_filters(
    State(state): State<AppState>,
    Json(filters): Json<SearchFilters>,
) -> Result<Json<ApiResponse<SearchView>>, ApiError> {
    let outcome = state.search.apply_filters(filters).await?;
    Ok(Json(ApiResponse::ok(SearchView::from_coordinator(&state.search, Some(outcome)))))
}

pub async fn next_search_page(
    State(state): State<AppState>,
    Query(next): Query<NextPage>,
) -> Result<Json<ApiResponse<SearchView>>, ApiError> {
    let outcome = match next.after {
        Some(manga_id) => state.search.load_next_page_if_needed(manga_id).await?,
        None => state.search.load_next_page().await?,
    };
    Ok(Json(ApiResponse::ok(SearchView::from_coordinator(&state.search, Some(outcome)))))
}

pub async fn retry_search(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SearchView>>, ApiError> {
    let outcome = state.search.retry().await?;
    Ok(Json(ApiResponse::ok(SearchView::from_coordinator(&state.search, Some(outcome)))))
}
