// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Failed to render report: {0}")]
    RenderFailure(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the failure was caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::BadRequest(_) | AppError::UnsupportedFormat(_))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::UnsupportedFormat(msg) => (
                StatusCode::BAD_REQUEST,
                "unsupported_format",
                Some(msg.clone()),
            ),
            AppError::SourceUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, "source_unavailable", Some(msg.clone()))
            }
            AppError::InvalidArgument(msg) => {
                tracing::error!(error = %msg, "Invalid argument inside report pipeline");
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_argument", None)
            }
            AppError::RenderFailure(msg) => {
                tracing::error!(error = %msg, "Report rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "render_failure", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
