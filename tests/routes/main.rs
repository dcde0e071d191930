#[path = "../common/mod.rs"]
mod common;

mod feed_tests;
mod library_tests;
mod search_tests;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use common::ScriptedCatalog;
use tankodex::cache::MangaCache;
use tankodex::library::CollectionStore;
use tankodex::routes;
use tankodex::state::AppState;

fn app(catalog: Arc<ScriptedCatalog>) -> Router {
    let state = AppState::new(
        catalog,
        CollectionStore::in_memory(),
        Arc::new(MangaCache::new(Duration::from_secs(60))),
        20,
    );
    routes::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
