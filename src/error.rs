//! Error types for the service
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Error type returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed request data
    #[error("{0}")]
    InvalidRequest(String),

    /// No completion API key was configured at startup
    #[error("No API key found")]
    MissingApiKey,

    /// The Reddit post could not be scraped
    #[error("Could not fetch post")]
    PostUnavailable,

    /// Completion API failure
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Cache file could not be written
    #[error(transparent)]
    Storage(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) | AppError::MissingApiKey | AppError::PostUnavailable => {
                StatusCode::BAD_REQUEST
            }
            AppError::Completion(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

/// Bodies that are not JSON or have the wrong field types are request errors too.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

// == Fetch Error Enum ==
/// Failure while reading a Reddit listing.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Reddit answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload did not have the expected listing shape
    #[error("malformed payload: {0}")]
    Malformed(String),
}

// == Completion Error Enum ==
/// Failure while calling the completion API.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status; `message` is the API's own error text
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("No completion in response")]
    EmptyResponse,
}

// == Store Error Enum ==
/// Failure while persisting a cache file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write cache file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the handlers.
pub type Result<T> = std::result::Result<T, AppError>;
