use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::handlers::{feed, library, search};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/feed", get(feed::get_feed))
        .route("/feed/load", post(feed::load_feed))
        .route("/feed/next", post(feed::next_feed_page))
        .route("/feed/retry", post(feed::retry_feed))
        .route("/search", get(search::get_search))
        .route("/search/filters", post(search::update_filters))
        .route("/search/next", post(search::next_search_page))
        .route("/search/retry", post(search::retry_search))
        .route("/library", get(library::list_library).post(library::add_entry))
        .route("/library/stats", get(library::library_stats))
        .route(
            "/library/{id}",
            get(library::check_entry)
                .patch(library::update_entry)
                .delete(library::delete_entry),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .with_state(state)
}
