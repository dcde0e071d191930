use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use super::{app, send};
use crate::common::{ScriptedCatalog, Step};

#[tokio::test]
async fn test_library_lifecycle() {
    let app = app(Arc::new(ScriptedCatalog::new(100)));

    let (status, body) = send(
        &app,
        "POST",
        "/library",
        Some(json!({ "manga_id": 5, "status": "Collected" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Manga 005");
    assert_eq!(body["data"]["total_volumes"], 12);
    assert_eq!(body["data"]["volumes_bought"], 0);

    let (_, body) = send(&app, "GET", "/library/5", None).await;
    assert_eq!(body["data"]["existing"], true);
    let (_, body) = send(&app, "GET", "/library/6", None).await;
    assert_eq!(body["data"]["existing"], false);

    let (_, body) = send(&app, "GET", "/library?status=collected", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (status, _) = send(&app, "GET", "/library?status=Dropped", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "PATCH",
        "/library/5",
        Some(json!({
            "volumes_bought": 12,
            "current_volume": 12,
            "completed": true,
            "status": "Collected"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Completed");

    let (_, body) = send(&app, "GET", "/library/stats", None).await;
    assert_eq!(body["data"]["total_mangas"], 1);
    assert_eq!(body["data"]["total_volumes_owned"], 12);
    assert_eq!(body["data"]["by_status"]["Completed"], 1);

    let (status, _) = send(&app, "DELETE", "/library/5", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/library/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/library", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_library_progress_capped_at_total_volumes() {
    let app = app(Arc::new(ScriptedCatalog::new(100)));
    send(
        &app,
        "POST",
        "/library",
        Some(json!({ "manga_id": 3, "status": "Collected" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/library/3",
        Some(json!({
            "volumes_bought": 999,
            "current_volume": 500,
            "completed": false,
            "status": "Collected"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["volumes_bought"], 12);
    assert_eq!(body["data"]["current_volume"], 12);
    assert_eq!(body["data"]["status"], "Completed");

    let (_, body) = send(&app, "GET", "/library/stats", None).await;
    assert_eq!(body["data"]["total_volumes_owned"], 12);
}

#[tokio::test]
async fn test_library_unknown_entries() {
    let catalog = Arc::new(ScriptedCatalog::new(100));
    let app = app(catalog.clone());

    let (status, _) = send(
        &app,
        "PATCH",
        "/library/9",
        Some(json!({
            "volumes_bought": 1,
            "current_volume": 1,
            "completed": false,
            "status": "Reading"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    catalog.script(Step::Fail(404));
    let (status, body) = send(&app, "POST", "/library", Some(json!({ "manga_id": 77 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}
