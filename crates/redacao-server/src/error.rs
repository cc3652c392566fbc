use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use redacao_core::error::CoreError;

/// Unified API error type for all route handlers.
///
/// Messages are the client-facing text. Upstream and internal errors keep
/// the underlying cause: upstream causes are sent back as `details`,
/// internal ones are only logged.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Upstream { message: String, details: String },
    Internal { message: String, source: String },
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn upstream(message: impl Into<String>, cause: impl Display) -> Self {
        ApiError::Upstream {
            message: message.into(),
            details: cause.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, cause: impl Display) -> Self {
        ApiError::Internal {
            message: message.into(),
            source: cause.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Render the error envelope, optionally tagged with `success`.
    pub fn into_response_with(self, success: Option<bool>) -> Response {
        let status = self.status();
        let (error, details) = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => (msg, None),
            ApiError::Upstream { message, details } => {
                tracing::error!(%details, "upstream error: {message}");
                (message, Some(details))
            }
            ApiError::Internal { message, source } => {
                tracing::error!(%source, "internal error: {message}");
                (message, None)
            }
        };

        (
            status,
            Json(ErrorBody {
                success,
                error,
                details,
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_response_with(None)
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
