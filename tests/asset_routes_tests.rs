use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use asset_api::db;
use asset_api::router::{AssetApiState, asset_router};

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "asset-api-routes-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));
    path
}

async fn test_app(path: &Path) -> Router {
    db::ensure_schema(path).await.expect("bootstrap failed");
    let pool = db::connect(path).await.expect("pool connect failed");
    let storage = db::AssetStorage::new(pool);
    asset_router(AssetApiState::new(storage))
}

#[tokio::test]
async fn create_then_list_round_trips_an_asset() {
    let path = temp_db_path("round-trip");
    let app = test_app(&path).await;

    let payload = json!({
        "name": "Widget",
        "code": "WGT-1",
        "price": 9.5,
        "website": "https://example.com",
    });
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/assets")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let created: Value = serde_json::from_slice(&body).expect("response body was not json");
    assert_eq!(created["id"], json!(1));
    assert_eq!(created["name"], json!("Widget"));
    assert_eq!(created["price"], json!(9.5));
    assert_eq!(created["website"], json!("https://example.com"));
    assert_eq!(created["description"], Value::Null);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/assets")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let listed: Value = serde_json::from_slice(&body).expect("response body was not json");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["code"], json!("WGT-1"));

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn fetch_by_id_returns_the_stored_asset() {
    let path = temp_db_path("by-id");
    let app = test_app(&path).await;

    let payload = json!({
        "name": "Gadget",
        "code": "GDG-1",
        "price": 1.25,
    });
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/assets")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/assets/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let fetched: Value = serde_json::from_slice(&body).expect("response body was not json");
    assert_eq!(fetched["id"], json!(1));
    assert_eq!(fetched["name"], json!("Gadget"));
    assert_eq!(fetched["website"], Value::Null);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn unknown_asset_id_returns_structured_404() {
    let path = temp_db_path("missing-id");
    let app = test_app(&path).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/assets/999")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains(r#""code":"NOT_FOUND""#));

    let _ = fs::remove_file(&path);
}
