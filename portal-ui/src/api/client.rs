//! HTTP API Client
//!
//! Functions for communicating with the Intern Portal REST API.

use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::state::models::{HealthStatus, InternProfile, LeaderboardEntry};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Local storage key holding a user-chosen API base URL
const API_URL_STORAGE_KEY: &str = "portal_api_url";

/// Client-side limit on a single request
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the API base URL
///
/// Local storage wins, then the `PORTAL_API_URL` build-time variable, then
/// [`DEFAULT_API_BASE`].
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    resolve_api_base(stored.as_deref(), option_env!("PORTAL_API_URL"))
}

/// Pick the base URL from the available sources
fn resolve_api_base(stored: Option<&str>, build_time: Option<&str>) -> String {
    let url = stored
        .filter(|s| !s.trim().is_empty())
        .or(build_time.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_API_BASE);

    normalize_api_base(url)
}

/// Trim whitespace and any trailing slash
pub fn normalize_api_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, &normalize_api_base(url));
        }
    }
}

/// Why a request failed
#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    Network(String),
    Timeout(u32),
    Status(u16),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::Timeout(ms) => write!(f, "Request timed out after {} ms", ms),
            FetchError::Status(code) => write!(f, "Server responded with status {}", code),
            FetchError::Decode(e) => write!(f, "Parse error: {}", e),
        }
    }
}

// ============ API Functions ============

/// Fetch the current intern's profile
pub async fn fetch_intern() -> Result<InternProfile, FetchError> {
    get_json(&get_api_base(), "/api/intern").await
}

/// Fetch the ranked leaderboard
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, FetchError> {
    get_json(&get_api_base(), "/api/leaderboard").await
}

/// Check the health of the API at `base`, which need not be the saved one
pub async fn check_health(base: &str) -> Result<HealthStatus, FetchError> {
    get_json(&normalize_api_base(base), "/api/health").await
}

/// GET a JSON document, racing it against [`REQUEST_TIMEOUT_MS`]
async fn get_json<T: DeserializeOwned>(base: &str, path: &str) -> Result<T, FetchError> {
    let url = format!("{}{}", base, path);

    let request = async {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    };

    let request = Box::pin(request);
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(REQUEST_TIMEOUT_MS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve_api_base(None, None), "http://localhost:3000");
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.org/"), Some("https://build.example.org")),
            "https://api.example.org"
        );
        assert_eq!(
            resolve_api_base(None, Some("https://build.example.org/")),
            "https://build.example.org"
        );
        assert_eq!(
            resolve_api_base(Some("  "), Some("https://build.example.org")),
            "https://build.example.org"
        );
    }

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(
            normalize_api_base(" https://staging.example.org/ "),
            "https://staging.example.org"
        );
        assert_eq!(normalize_api_base("http://localhost:3000"), DEFAULT_API_BASE);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Server responded with status 500"
        );
        assert!(FetchError::Timeout(REQUEST_TIMEOUT_MS)
            .to_string()
            .contains("10000"));
    }
}
