use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use super::{app, send};
use crate::common::{ScriptedCatalog, Step};

#[tokio::test]
async fn test_feed_load_and_next_page() {
    let app = app(Arc::new(ScriptedCatalog::new(30)));

    let (status, body) = send(&app, "GET", "/feed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mangas"], json!([]));

    let (status, body) = send(&app, "POST", "/feed/load", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["outcome"], "loaded");
    assert_eq!(body["data"]["mangas"].as_array().unwrap().len(), 20);
    assert_eq!(body["data"]["has_more_pages"], true);
    assert_eq!(body["data"]["top_five"].as_array().unwrap().len(), 5);

    let (_, body) = send(&app, "POST", "/feed/next", None).await;
    assert_eq!(body["data"]["mangas"].as_array().unwrap().len(), 30);
    assert_eq!(body["data"]["has_more_pages"], false);

    let (_, body) = send(&app, "POST", "/feed/next", None).await;
    assert_eq!(body["data"]["outcome"], "nothing_to_load");
}

#[tokio::test]
async fn test_feed_failure_is_bad_gateway() {
    let catalog = Arc::new(ScriptedCatalog::new(30));
    let app = app(catalog.clone());

    catalog.script(Step::Fail(500));
    let (status, body) = send(&app, "POST", "/feed/load", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "HTTP status code: 500");

    let (_, body) = send(&app, "GET", "/feed", None).await;
    assert_eq!(body["data"]["error_message"], "HTTP status code: 500");

    let (status, _) = send(&app, "POST", "/feed/retry", None).await;
    assert_eq!(status, StatusCode::OK);
}
