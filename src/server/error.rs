//! Error types for the server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::VoyageError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Well-formed selection that failed during loading, fitting or plotting
    #[error("Evaluation failed: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<VoyageError> for ServerError {
    fn from(err: VoyageError) -> Self {
        if err.is_selection_error() {
            return ServerError::BadRequest(err.to_string());
        }
        match err {
            VoyageError::Io(e) => ServerError::Internal(e.to_string()),
            VoyageError::ComputationError(msg) => ServerError::Internal(msg),
            other => ServerError::Unprocessable(other.to_string()),
        }
    }
}

/// Malformed bodies and missing content types get the same JSON error shape as everything else
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg.clone()),
            ServerError::Unprocessable(msg) => {
                tracing::warn!(detail = %msg, "Evaluation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            ServerError::Internal(msg) => {
                tracing::error!(detail = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred".to_string())
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_errors_are_bad_requests() {
        let err: ServerError = VoyageError::UnknownDataset("Boston".to_string()).into();
        assert!(matches!(err, ServerError::BadRequest(ref m) if m.contains("Boston")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fit_errors_are_unprocessable() {
        let err: ServerError = VoyageError::TrainingError("n_neighbors too large".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_keeps_message() {
        let response = ServerError::NotFound("no such route".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err: ServerError = VoyageError::ComputationError("secret".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
