// ABOUTME: Shared API response types and error handling
// ABOUTME: Maps storage failures and extractor rejections to `{ "error": ... }` bodies

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bikelinks_storage::StorageError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Body returned by mutating endpoints that have nothing else to report
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        SuccessResponse {
            success: true,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be parsed (bad JSON body or path segment)
    #[error("{0}")]
    BadRequest(String),

    /// A storage operation failed; `context` is the message shown to clients
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    /// Build a `map_err` adapter that tags a storage error with the
    /// client-facing message for the operation that failed
    pub fn storage(context: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |source| ApiError::Storage { context, source }
    }

    fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Storage {
                source: StorageError::Validation(err),
                ..
            } => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Storage {
                source: err @ StorageError::CategoryInUse { .. },
                ..
            } => (StatusCode::CONFLICT, err.to_string()),
            ApiError::Storage { context, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.to_status_and_message();

        // The cause of a 500 is logged here and never sent to the client
        match &self {
            ApiError::Storage { context, source } if status.is_server_error() => {
                error!(error = %source, "{}", context);
            }
            _ => {
                info!(status = status.as_u16(), error = %message, "API error response");
            }
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
