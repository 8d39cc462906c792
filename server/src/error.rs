//! Error types for pseudofeed
//!
//! This module defines error types for each layer:
//! - `ValidationError`: Feed documents that break the JSON Feed schema
//! - `StoreError`: Feed store failures (I/O, decoding, validation)
//! - `ShareError`: Why a share payload could not be split into title and URL
//! - `ConfigError`: Startup configuration problems
//! - `AppError`: HTTP layer errors (wraps the above for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Schema violations in a feed document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported feed version: {0:?}")]
    UnsupportedVersion(String),

    #[error("feed title must not be empty")]
    MissingTitle,

    #[error("item {index} has an empty id")]
    MissingItemId { index: usize },

    #[error("item {index} has an empty url")]
    EmptyItemUrl { index: usize },
}

/// Feed store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading feed file: {0}")]
    Read(#[source] std::io::Error),

    #[error("writing feed file: {0}")]
    Write(#[source] std::io::Error),

    #[error("parsing feed document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("encoding feed document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid feed document: {0}")]
    Validation(#[from] ValidationError),
}

/// Reasons the "<title> <url>" share heuristic does not apply
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("no space separating a title from a url")]
    NoSeparator,

    #[error("failed parsing URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed parsing URL: no host")]
    MissingHost,
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    #[error("port is required")]
    EmptyPort,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("rendering template: {0}")]
    Template(#[from] askama::Error),

    #[error("{error}")]
    BadRequest {
        error: &'static str,
        raw: Option<String>,
    },
}

impl AppError {
    pub fn bad_request(error: &'static str) -> Self {
        AppError::BadRequest { error, raw: None }
    }

    pub fn bad_request_with(error: &'static str, raw: impl ToString) -> Self {
        AppError::BadRequest {
            error,
            raw: Some(raw.to_string()),
        }
    }

    /// Machine-readable code reported in the `error` field
    fn code(&self) -> &'static str {
        match self {
            AppError::Store(StoreError::Read(_)) => "Error reading file",
            AppError::Store(StoreError::Write(_)) => "Error writing file",
            AppError::Store(StoreError::Parse(_)) => "Error parsing stored feed",
            AppError::Store(StoreError::Encode(_)) => "Error marshaling JSON",
            AppError::Store(StoreError::Validation(_)) => "Generated invalid feed",
            AppError::Template(_) => "Error executing template",
            AppError::BadRequest { error, .. } => *error,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, raw) = match &self {
            AppError::Store(e) => {
                tracing::error!("Feed store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Some(source_message(e)))
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Some(e.to_string()))
            }
            AppError::BadRequest { raw, .. } => (StatusCode::BAD_REQUEST, raw.clone()),
        };

        let body = Json(ErrorResponse {
            error: self.code(),
            raw,
        });

        (status, body).into_response()
    }
}

/// The underlying cause of a store error, without our own prefix
fn source_message(e: &StoreError) -> String {
    match e {
        StoreError::Read(io) | StoreError::Write(io) => io.to_string(),
        StoreError::Parse(json) | StoreError::Encode(json) => json.to_string(),
        StoreError::Validation(v) => v.to_string(),
    }
}
