use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use super::{app, send};
use crate::common::{Call, ScriptedCatalog};

#[tokio::test]
async fn test_search_filters_and_scroll() {
    let catalog = Arc::new(ScriptedCatalog::new(100));
    let app = app(catalog.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/search/filters",
        Some(json!({ "search_text": "one" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["filters"]["search_text"], "one");
    assert_eq!(body["data"]["mangas"].as_array().unwrap().len(), 20);

    let (_, body) = send(&app, "POST", "/search/next?after=3", None).await;
    assert_eq!(body["data"]["outcome"], "nothing_to_load");

    let (_, body) = send(&app, "POST", "/search/next?after=20", None).await;
    assert_eq!(body["data"]["mangas"].as_array().unwrap().len(), 40);
    assert_eq!(
        catalog.last_call(),
        Some(Call::Search {
            query: "one".to_string(),
            page: 2,
            per_page: 20
        })
    );
}
