//! Error types for the store and the HTTP boundary.
//!
//! # Design
//! `StoreError` is what the store itself can report. `ApiError` is what a
//! handler returns; it renders as `{"detail": ...}` with the matching status.
//! Axum's own body and path rejections are folded into
//! `ApiError::Validation` so every malformed request answers 422.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by `TodoStore` mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i64),
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    /// The request body or path did not match the expected shape.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
