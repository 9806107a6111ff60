//! Integration test: embedded page structure

use dataset_voyage::server::{create_router, AppState, ServerConfig};
use std::sync::Arc;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origin: None,
    };
    let state = Arc::new(AppState::new(config.clone()));
    create_router(state, &config)
}

async fn get_index_html() -> String {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_has_title() {
    let html = get_index_html().await;
    assert!(html.contains("<title>Dataset Voyage</title>"));
    assert!(html.contains("<h1>Dataset Voyage</h1>"));
}

#[tokio::test]
async fn test_index_has_selectors() {
    let html = get_index_html().await;
    assert!(html.contains("id=\"dataset\""));
    assert!(html.contains("id=\"classifier\""));
    assert!(html.contains("id=\"sliders\""));
    assert!(html.contains("Select Dataset"));
    assert!(html.contains("Select Classifier"));
}

#[tokio::test]
async fn test_index_reports_evaluation_fields() {
    let html = get_index_html().await;
    for field in ["Shape of dataset", "Number of classes", "Classifier =", "Accuracy ="] {
        assert!(html.contains(field), "Missing output field: {}", field);
    }
}

#[tokio::test]
async fn test_index_calls_api() {
    let html = get_index_html().await;
    assert!(html.contains("/api/datasets"));
    assert!(html.contains("/api/classifiers"));
    assert!(html.contains("/api/evaluate"));
}

#[tokio::test]
async fn test_index_is_self_contained() {
    let html = get_index_html().await;
    assert!(!html.contains("<script src="));
    assert!(!html.contains("<link rel=\"stylesheet\""));
}
