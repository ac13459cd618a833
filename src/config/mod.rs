use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an embedding application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub cache: CacheConfig,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let cache_dir =
            PathBuf::from(env::var("APP_CACHE_DIR").unwrap_or_else(|_| ".autoapply_cache".to_string()));

        let timeout_raw =
            env::var("APP_STORAGE_TIMEOUT_MS").unwrap_or_else(|_| "10000".to_string());
        let timeout_ms = timeout_raw
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout { value: timeout_raw })?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            cache: CacheConfig { dir: cache_dir },
            storage: StorageConfig { timeout_ms },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the local document cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub dir: PathBuf,
}

/// Controls for calls crossing the persistence boundary.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub timeout_ms: u64,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout { value } => {
                write!(
                    f,
                    "APP_STORAGE_TIMEOUT_MS must be a whole number of milliseconds, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
