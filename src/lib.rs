//! # Intern Portal
//!
//! Referral and donation dashboard backend. Serves a single intern's profile
//! and a donation leaderboard over a small read-only JSON API.
//!
//! ## Modules
//!
//! - [`portal`]: Data model, ranking, and the read-only repository
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML and environment configuration
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intern_portal::portal::{PortalRepository, StaticRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = StaticRepository::default();
//!
//!     let profile = repo.profile().await?;
//!     println!("{} ({}) raised ${}", profile.name, profile.referral_code, profile.donations);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod portal;

// Re-export top-level types for convenience
pub use portal::{
    InternProfile, LeaderboardEntry, Participant, PortalRepository, RepositoryError,
    StaticRepository,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, CorsConfig, Environment, LoggingConfig};
