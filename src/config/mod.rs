use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub store: StoreBackend,
    /// Present whenever `DATABASE_URL` is set; required by the MySQL backend
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Configuration(format!("Invalid LOG_FORMAT '{}'", other))),
        }
    }
}

/// Backing store for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    MySql,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(StoreBackend::MySql),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::Configuration(format!(
                "Invalid CATALOG_STORE '{}', expected 'mysql' or 'memory'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn parse(raw: &str) -> Self {
        Self {
            allowed_origins: raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", name)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let store: StoreBackend = env::var("CATALOG_STORE")
            .unwrap_or_else(|_| "mysql".to_string())
            .parse()?;

        let database = match (store, env::var("DATABASE_URL").is_ok()) {
            (StoreBackend::MySql, _) | (_, true) => Some(DatabaseConfig::from_env()?),
            _ => None,
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_default().parse()?,
            },
            server: ServerConfig::from_env()?,
            store,
            database,
            cors: CorsConfig::parse(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        match (&self.store, &self.database) {
            (StoreBackend::MySql, None) => {
                return Err(AppError::Configuration(
                    "DATABASE_URL is required for the mysql store".to_string(),
                ));
            }
            (_, Some(database)) => database.validate()?,
            _ => {}
        }

        Ok(())
    }
}
