//! Health Routes
//!
//! - GET /api/health - Liveness check with server timestamp

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::HealthResponse;

/// GET /api/health
///
/// Succeeds whenever the process is serving; no dependency checks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Intern Portal API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
