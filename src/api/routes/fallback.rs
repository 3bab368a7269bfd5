//! Fallback Route
//!
//! Answers every unmatched path, and unsupported methods on known paths.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::api::error::ApiError;

/// Any unmatched request
///
/// Echoes the method and the requested path (with query) back to the caller.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    ApiError::NotFound { method, path }
}
