//! Error types for hbc-ai
//!
//! Every handler error renders as `{"error": {"code": .., "message": ..}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{ClassifierError, SampleError};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upload over the configured body limit (413)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Model still warming up upstream (503)
    #[error("Model loading: {0}")]
    ModelLoading(String),

    /// Upstream classifier failure (502)
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// hbc-common error
    #[error("Common error: {0}")]
    Common(#[from] hbc_common::Error),
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::UnsupportedFormat(_) => ApiError::BadRequest(err.to_string()),
            ClassifierError::Io(e) => ApiError::Io(e),
            ClassifierError::ModelLoading { .. } => ApiError::ModelLoading(err.to_string()),
            ClassifierError::Network(_)
            | ClassifierError::Unauthorized
            | ClassifierError::Api(_, _)
            | ClassifierError::InvalidResponse(_) => ApiError::Classifier(err.to_string()),
        }
    }
}

impl From<SampleError> for ApiError {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::UnknownSample(_) | SampleError::Missing(_) => {
                ApiError::NotFound(err.to_string())
            }
            SampleError::Load(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg)
            }
            ApiError::ModelLoading(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "MODEL_LOADING", msg)
            }
            ApiError::Classifier(msg) => (StatusCode::BAD_GATEWAY, "CLASSIFIER_ERROR", msg),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
            ),
            ApiError::Io(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
