//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Deployment environment, selects the default CORS origins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::Invalid {
                key: "environment".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Cross-origin access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Explicit origin list; when absent the environment's defaults apply
    #[serde(default)]
    pub origins: Option<Vec<String>>,

    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            origins: None,
            allow_credentials: default_allow_credentials(),
        }
    }
}

impl CorsConfig {
    /// Whether the origin list is the `*` wildcard
    pub fn allows_any_origin(&self) -> bool {
        self.origins
            .as_ref()
            .is_some_and(|origins| origins.iter().any(|o| o == "*"))
    }

    /// Reject combinations the CORS layer cannot express
    ///
    /// Browsers refuse credentials on wildcard responses, so `*` is only
    /// accepted with `allow_credentials = false`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allows_any_origin() && self.allow_credentials {
            return Err(ConfigError::Invalid {
                key: "cors.origins".to_string(),
                value: "* (wildcard requires allow_credentials = false)".to_string(),
            });
        }
        Ok(())
    }

    /// Origins allowed to call the API
    pub fn allowed_origins(&self) -> Vec<String> {
        if let Some(origins) = &self.origins {
            return origins.clone();
        }

        match self.environment {
            Environment::Production => vec!["https://intern-portal-gules.vercel.app".to_string()],
            Environment::Development => vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "intern_portal=info,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.cors.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from `PORTAL_CONFIG`, the default locations, or environment only
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Ok(explicit) = std::env::var("PORTAL_CONFIG") {
            return Self::load_with_env(Path::new(&explicit));
        }

        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("intern-portal").join("config.toml")),
            Some(PathBuf::from("/etc/intern-portal/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        match Self::load_first_existing(&config_paths)? {
            Some(config) => Ok(config),
            None => Self::from_env(),
        }
    }

    /// Load the first of `paths` that exists, with environment overrides
    ///
    /// A file that exists but cannot be read or parsed is an error rather
    /// than a reason to fall through to the next candidate.
    pub fn load_first_existing(paths: &[PathBuf]) -> Result<Option<Self>, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path).map(Some),
            None => Ok(None),
        }
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("PORTAL_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("PORTAL_PORT").or_else(|| lookup("PORT")) {
            self.api.port = parse_value("PORTAL_PORT", &port)?;
        }
        if let Some(timeout) = lookup("PORTAL_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = parse_value("PORTAL_REQUEST_TIMEOUT_SECS", &timeout)?;
        }

        // CORS overrides
        if let Some(env) = lookup("PORTAL_ENV") {
            self.cors.environment = env.parse()?;
        }
        if let Some(origins) = lookup("PORTAL_CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            self.cors.origins = Some(origins);
        }

        // Logging overrides
        if let Some(level) = lookup("PORTAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PORTAL_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.cors.validate()
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Intern Portal Configuration
#
# Environment variables override these settings:
# - PORTAL_HOST
# - PORTAL_PORT (or PORT)
# - PORTAL_REQUEST_TIMEOUT_SECS
# - PORTAL_ENV
# - PORTAL_CORS_ORIGINS (comma separated)
# - PORTAL_LOG_LEVEL
# - PORTAL_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 3000

# Request timeout in seconds
request_timeout_secs = 30

[cors]
# Deployment environment: development or production
environment = "development"

# Explicit allowed origins (overrides the environment defaults)
# origins = ["http://localhost:5173", "http://localhost:3000"]

# Allow cookies and credentials on cross-origin requests
allow_credentials = true

[logging]
# Log filter directive (RUST_LOG takes precedence)
level = "intern_portal=info,tower_http=debug"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
