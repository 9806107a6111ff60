//! API route definitions

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::error::ServerError;
use super::{handlers, state::AppState, ServerConfig};

async fn handle_404() -> ServerError {
    ServerError::NotFound(
        "Not found. Visit / for the web UI or /api/health to check API status.".to_string(),
    )
}

async fn handle_405() -> ServerError {
    ServerError::MethodNotAllowed(
        "Method not allowed. Check the API documentation for supported methods.".to_string(),
    )
}

/// Create the main application router
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/datasets", get(handlers::list_datasets))
        .route("/classifiers", get(handlers::list_classifiers))
        .route("/evaluate", post(handlers::evaluate))
        .route("/plot.svg", get(handlers::plot_svg))
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405);

    let app = Router::new()
        .nest("/api", api_routes)
        .route("/", get(handlers::serve_index))
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405)
        .with_state(state);

    // CORS configured via CORS_ORIGIN (default: allow all for local use)
    let cors = match config.cors_origin.as_deref() {
        Some(origin) if !origin.is_empty() && origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .unwrap_or_else(|_| axum::http::HeaderValue::from_static("*")),
            )
            .allow_methods(Any)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    app.layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
