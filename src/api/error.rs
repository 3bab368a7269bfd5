//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum::BoxError;
use std::any::Any;
use std::time::Duration;
use thiserror::Error;

use crate::api::dto::ErrorResponse;
use crate::portal::RepositoryError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matches the request
    #[error("Cannot {method} {path}")]
    NotFound { method: Method, path: String },

    /// Request exceeded the server-side time limit
    #[error("Request did not complete within {0:?}")]
    Timeout(Duration),

    /// Internal server error
    #[error("{0}")]
    Internal(String),

    /// Data source error
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Status code and the short label placed in the `error` field
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "Route not found"),
            ApiError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, "Request timeout"),
            ApiError::Internal(_) | ApiError::Repository(_) | ApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label) = self.status_and_label();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::debug!(
                request_id = %request_id,
                error_message = %self,
                "Unmatched route"
            );
        }

        let body = ErrorResponse {
            error: label.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a caught handler panic into a 500 response
///
/// Used with `CatchPanicLayer` so one failing request never takes the server
/// down.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Internal(format!("Request handler panicked: {}", detail)).into_response()
}

/// Convert an error from the timeout middleware into a JSON response
pub fn middleware_error(limit: Duration, err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout(limit)
    } else {
        ApiError::Internal(format!("Unhandled middleware error: {}", err))
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
