//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::Config;
use crate::portal::{PortalRepository, StaticRepository};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only data source for profiles and the leaderboard
    pub repository: Arc<dyn PortalRepository>,
    /// Server configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over the given repository
    pub fn new(repository: Arc<dyn PortalRepository>, config: Config) -> Self {
        Self {
            repository,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// AppState backed by the built-in static records
    pub fn with_static_data(config: Config) -> Self {
        Self::new(Arc::new(StaticRepository::default()), config)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
