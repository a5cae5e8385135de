//! Error contract of the proxy
//!
//! A closed set of failure kinds plus one residual catch-all. The `Display`
//! output of each variant is the client-facing message; upstream variants
//! carry the underlying cause in a separate field so it can be logged
//! without leaking to callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body was missing or not a JSON object.
    #[error("Invalid JSON payload")]
    InvalidPayload,

    /// `q` was absent or blank.
    #[error("Text to translate is empty")]
    EmptyText,

    /// Restricted-language mode rejected the requested target.
    #[error("Target language '{0}' is not supported")]
    UnsupportedTarget(String),

    /// Transport failure or non-success status from the provider.
    #[error("Failed to connect to the translation API")]
    UpstreamUnavailable { detail: String },

    /// Provider answered with a body we could not make sense of.
    #[error("Unexpected response format from translation API")]
    UpstreamFormat { detail: String },

    /// Anything unclassified. Must never expose its detail to the caller.
    #[error("An internal server error occurred")]
    Internal { detail: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload | AppError::EmptyText | AppError::UnsupportedTarget(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::UpstreamFormat { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::UpstreamUnavailable { detail } => {
                error!("upstream request failed: {}", detail)
            }
            AppError::UpstreamFormat { detail } => {
                error!("unexpected upstream response: {}", detail)
            }
            AppError::Internal { detail } => error!("internal error: {}", detail),
            _ => {}
        }
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
