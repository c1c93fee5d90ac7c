use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::BubbleError;

/// Errors surfaced to HTTP callers. Every variant renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server is missing required configuration (500).
    #[error("{0}")]
    ConfigMissing(String),

    /// The ticker listing could not be built (500).
    #[error("{0}")]
    SourceUnavailable(String),

    /// Anything else (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ConfigMissing(_)
            | ApiError::SourceUnavailable(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<BubbleError> for ApiError {
    fn from(e: BubbleError) -> Self {
        match e {
            BubbleError::ConfigMissing(msg) => ApiError::ConfigMissing(msg),
            BubbleError::SourceUnavailable(msg) => ApiError::SourceUnavailable(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Render a handler panic as a JSON 500.
pub(crate) fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected failure".to_string()
    };
    ApiError::Internal(detail).into_response()
}
