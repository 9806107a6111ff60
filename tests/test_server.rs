//! Integration test: Server API endpoints

use dataset_voyage::server::{create_router, AppState, ServerConfig};
use std::sync::Arc;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
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

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_datasets_endpoint() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/datasets").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let datasets = body["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 5);
    assert_eq!(datasets[0]["name"], "Iris");
    assert_eq!(datasets[0]["n_samples"], 150);
    assert_eq!(datasets[0]["n_features"], 4);
    assert_eq!(datasets[0]["n_classes"], 3);
}

#[tokio::test]
async fn test_classifiers_endpoint() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/classifiers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let classifiers = body["classifiers"].as_array().unwrap();
    let names: Vec<&str> = classifiers.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["KNN", "SVM", "Random Forest"]);

    let knn_slider = &classifiers[0]["sliders"][0];
    assert_eq!(knn_slider["name"], "K");
    assert_eq!(knn_slider["min"], 1.0);
    assert_eq!(knn_slider["max"], 15.0);
    assert_eq!(knn_slider["integer"], true);

    let forest_sliders = classifiers[2]["sliders"].as_array().unwrap();
    assert_eq!(forest_sliders.len(), 2);
    assert_eq!(forest_sliders[1]["label"], "Num of estimators");
}

#[tokio::test]
async fn test_evaluate_iris_knn() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/evaluate",
            json!({ "dataset": "Iris", "classifier": "KNN", "params": { "K": 5 } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["dataset"]["n_samples"], 150);
    assert_eq!(body["dataset"]["n_classes"], 3);
    assert_eq!(body["classifier"], "KNN");
    assert_eq!(body["params"]["K"], 5.0);

    let accuracy = body["accuracy"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&accuracy));

    assert_eq!(body["projection"]["points"].as_array().unwrap().len(), 150);
    assert_eq!(body["projection"]["labels"].as_array().unwrap().len(), 150);
    assert_eq!(body["plot_svg"].as_str().unwrap().matches("<circle").count(), 150);
}

#[tokio::test]
async fn test_evaluate_clamps_slider_values() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/evaluate",
            json!({
                "dataset": "wine",
                "classifier": "random_forest",
                "params": { "max_depth": 99, "n_estimators": 0 }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["params"]["max_depth"], 15.0);
    assert_eq!(body["params"]["n_estimators"], 1.0);
}

#[tokio::test]
async fn test_evaluate_unknown_dataset() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/evaluate",
            json!({ "dataset": "Boston", "classifier": "KNN", "params": { "K": 3 } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert!(body["message"].as_str().unwrap().contains("Boston"));
}

#[tokio::test]
async fn test_evaluate_unknown_classifier() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/evaluate",
            json!({ "dataset": "Iris", "classifier": "Perceptron", "params": {} }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_evaluate_wrong_parameter_set() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/evaluate",
            json!({ "dataset": "Iris", "classifier": "SVM", "params": { "K": 3 } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plot_endpoint_returns_svg() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/plot.svg?dataset=Iris&classifier=KNN&K=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );

    let bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024).await.unwrap();
    let svg = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 150);
}

#[tokio::test]
async fn test_plot_endpoint_rejects_non_numeric_slider() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/plot.svg?dataset=Iris&classifier=KNN&K=five")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/evaluate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_wrong_method_body_is_json() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().method("DELETE").uri("/api/datasets").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert!(body["message"].as_str().unwrap().contains("Method not allowed"));
}

#[tokio::test]
async fn test_evaluate_malformed_json_is_json_error() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"dataset\": \"Iris\", "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_evaluate_missing_content_type_is_json_error() {
    let app = test_app();
    let payload = json!({ "dataset": "Iris", "classifier": "KNN", "params": { "K": 3 } });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/evaluate")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_evaluate_missing_field_is_json_error() {
    let app = test_app();
    let response = app
        .oneshot(post_json("/api/evaluate", json!({ "dataset": "Iris" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
}
