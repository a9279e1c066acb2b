//! HTTP integration tests, driven through the router without a socket.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use common::memory_data;
use random_quotes::{models::quotes::NewQuote, routes::router};
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_shows_guidance_when_empty() {
    let data = memory_data().await;

    let (status, content_type, body) = get(router(data), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("seed-quotes"));
    assert!(!body.contains("<figcaption>"));
}

#[tokio::test]
async fn home_shows_a_stored_quote() {
    let data = memory_data().await;
    data.store
        .insert_all(&[NewQuote::new("Simplicity is the soul of efficiency", "Austin Freeman")])
        .await
        .unwrap();

    let (status, _, body) = get(router(data), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Simplicity is the soul of efficiency"));
    assert!(body.contains("<figcaption>Austin Freeman</figcaption>"));
}

#[tokio::test]
async fn home_escapes_quote_markup() {
    let data = memory_data().await;
    data.store
        .insert_all(&[NewQuote::new("<script>alert(1)</script>", "Mallory")])
        .await
        .unwrap();

    let (_, _, body) = get(router(data), "/").await;

    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn storage_failure_renders_error_page() {
    let data = memory_data().await;
    sqlx::query("DROP TABLE quotes;")
        .execute(data.store.pool())
        .await
        .unwrap();

    let (status, _, body) = get(router(data), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("no such table"));
}

#[tokio::test]
async fn about_page_shows_version() {
    let data = memory_data().await;

    let (status, _, body) = get(router(data), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let data = memory_data().await;

    let (status, _, _) = get(router(data), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
