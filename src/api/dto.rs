//! Data Transfer Objects
//!
//! Response bodies that are not plain model types. Profiles and leaderboard
//! entries are serialized directly from [`crate::portal`].

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK" while the process is serving
    pub status: String,
    pub message: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error category, e.g. "Route not found"
    pub error: String,
    /// Diagnostic detail
    pub message: String,
}
