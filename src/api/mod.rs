//! Intern Portal REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Liveness check with server timestamp
//! - `GET /api/intern` - Current intern's profile
//! - `GET /api/leaderboard` - Participants ranked by donations
//!
//! Anything else answers 404 with `{"error": "Route not found", "message": "Cannot <METHOD> <path>"}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use intern_portal::api::{serve, AppState};
//! use intern_portal::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api_config = config.api.clone();
//!
//!     serve(AppState::with_static_data(config), &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method},
    routing::get,
    BoxError, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::{ApiConfig, CorsConfig};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    // Unsupported methods on known paths get the same 404 as unknown paths
    let api_routes = Router::new()
        .route(
            "/health",
            get(routes::health::health).fallback(routes::fallback::not_found),
        )
        .route(
            "/intern",
            get(routes::intern::get_intern).fallback(routes::fallback::not_found),
        )
        .route(
            "/leaderboard",
            get(routes::leaderboard::get_leaderboard).fallback(routes::fallback::not_found),
        );

    let cors = cors_layer(&state.config.cors);
    let timeout = Duration::from_secs(state.config.api.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback(routes::fallback::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    error::middleware_error(timeout, err)
                }))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// CORS policy for the configured deployment environment
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allows_any_origin() {
        // Credentials cannot be combined with `*`
        if config.allow_credentials {
            tracing::warn!("Wildcard CORS origin configured; credentials disabled");
        }
        tracing::debug!(environment = %config.environment, "Configured CORS for any origin");
        return cors.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    tracing::debug!(
        environment = %config.environment,
        origins = origins.len(),
        "Configured CORS"
    );

    cors.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(config.allow_credentials)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let uptime = state.clone();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Intern Portal API listening on {}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);
    tracing::info!("Intern data: http://{}/api/intern", addr);
    tracing::info!("Leaderboard: http://{}/api/leaderboard", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!(
        "Intern Portal API shut down gracefully after {}s",
        uptime.uptime_seconds()
    );
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{ErrorResponse, HealthResponse};
    use crate::config::{Config, Environment};
    use crate::portal::{
        is_ranked, InternProfile, LeaderboardEntry, PortalRepository, RepositoryError,
        RepositoryResult, StaticRepository,
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::with_static_data(Config::default()))
    }

    async fn send_get(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Repository whose every read fails
    struct OfflineRepository;

    #[async_trait]
    impl PortalRepository for OfflineRepository {
        async fn profile(&self) -> RepositoryResult<InternProfile> {
            Err(RepositoryError::Unavailable("database offline".to_string()))
        }

        async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>> {
            Err(RepositoryError::Unavailable("database offline".to_string()))
        }
    }

    /// Repository whose profile read outlives the request timeout
    struct SlowRepository;

    #[async_trait]
    impl PortalRepository for SlowRepository {
        async fn profile(&self) -> RepositoryResult<InternProfile> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StaticRepository::default().profile().await
        }

        async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>> {
            StaticRepository::default().leaderboard().await
        }
    }

    /// Repository that panics on profile reads
    struct PanickingRepository;

    #[async_trait]
    impl PortalRepository for PanickingRepository {
        async fn profile(&self) -> RepositoryResult<InternProfile> {
            panic!("profile store exploded");
        }

        async fn leaderboard(&self) -> RepositoryResult<Vec<LeaderboardEntry>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = send_get(create_test_app(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: HealthResponse = json_body(response).await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.message, "Intern Portal API is running");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_intern_profile() {
        let response = send_get(create_test_app(), "/api/intern").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["name"], "Vishwa Vikas");
        assert_eq!(body["referralCode"], "vishwavy2025");
        assert!(body["donations"].as_u64().is_some());
        assert!(!body["referralCode"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_is_sorted_and_ranked() {
        let response = send_get(create_test_app(), "/api/leaderboard").await;
        assert_eq!(response.status(), StatusCode::OK);

        let entries: Vec<LeaderboardEntry> = json_body(response).await;
        assert_eq!(entries.len(), 5);
        assert!(is_ranked(&entries));

        let donations: Vec<u64> = entries.iter().map(|e| e.donations).collect();
        assert_eq!(donations, vec![7400, 6800, 6200, 5800, 5200]);
        assert_eq!(donations.iter().sum::<u64>(), 31_400);
        assert!(entries[2].avatar_url.ends_with("seed=mike"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = send_get(create_test_app(), "/api/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error, "Route not found");
        assert_eq!(body.message, "Cannot GET /api/unknown");
    }

    #[tokio::test]
    async fn test_unknown_route_keeps_query() {
        let response = send_get(create_test_app(), "/nope?page=2").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.message, "Cannot GET /nope?page=2");
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_found() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/intern")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = json_body(response).await;
        assert!(body.message.contains("POST"));
        assert!(body.message.contains("/api/intern"));
    }

    #[tokio::test]
    async fn test_repository_failure_is_500() {
        let state = AppState::new(Arc::new(OfflineRepository), Config::default());
        let app = build_router(state);

        for uri in ["/api/intern", "/api/leaderboard"] {
            let response = send_get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: ErrorResponse = json_body(response).await;
            assert_eq!(body.error, "Internal server error");
            assert!(body.message.contains("database offline"));
        }
    }

    #[tokio::test]
    async fn test_handler_panic_is_isolated() {
        let state = AppState::new(Arc::new(PanickingRepository), Config::default());
        let app = build_router(state);

        let response = send_get(app.clone(), "/api/intern").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error, "Internal server error");
        assert!(body.message.contains("profile store exploded"));

        // The router keeps serving after the panic
        let response = send_get(app, "/api/leaderboard").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_json() {
        let mut config = Config::default();
        config.api.request_timeout_secs = 1;
        let app = build_router(AppState::new(Arc::new(SlowRepository), config));

        let response = send_get(app.clone(), "/api/intern").await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error, "Request timeout");
        assert_eq!(body.message, "Request did not complete within 1s");

        // Fast routes are unaffected
        let response = send_get(app, "/api/leaderboard").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = send_get(create_test_app(), "/api/health").await;
        let headers = response.headers();

        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/intern")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_cors_rejects_other_origin_in_production() {
        let mut config = Config::default();
        config.cors.environment = Environment::Production;
        let app = build_router(AppState::with_static_data(config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/intern")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard_origin() {
        let mut config = Config::default();
        config.cors.origins = Some(vec!["*".to_string()]);
        config.cors.allow_credentials = false;
        let app = build_router(AppState::with_static_data(config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/leaderboard")
                    .header(header::ORIGIN, "https://anywhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_cors_wildcard_with_credentials_does_not_panic() {
        let mut config = Config::default();
        config.cors.origins = Some(vec!["*".to_string()]);

        let response = send_get(build_router(AppState::with_static_data(config)), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
