/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
/// - `DATABASE_URL`: SQLite connection string (default: sqlite://tasks.db)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
/// - `DATABASE_RESET_ON_STARTUP`: Drop and recreate all tables on start (default: true)
/// - `RUST_LOG`: Log filter (default: tasktrack_api=debug,tasktrack_shared=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use tasktrack_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tasktrack_shared::db::pool;
use validator::Validate;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Host to bind to
    #[validate(length(min = 1, message = "API_HOST must not be empty"))]
    pub host: String,

    /// Port to bind to
    #[validate(range(min = 1, message = "API_PORT must be between 1 and 65535"))]
    pub port: u16,

    /// Allowed CORS origins (`*` = any)
    #[validate(length(min = 1, message = "CORS_ORIGINS must list at least one origin"))]
    pub cors_origins: Vec<String>,

    /// Log output format
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    #[validate(length(min = 1, message = "DATABASE_URL must not be empty"))]
    pub url: String,

    /// Maximum number of connections in pool
    #[validate(range(min = 1, message = "DATABASE_MAX_CONNECTIONS must be at least 1"))]
    pub max_connections: u32,

    /// Drop and recreate every table on startup
    ///
    /// WARNING: discards all stored data. Defaults to true so a fresh process
    /// always starts from empty tables; set to false to keep data across
    /// restarts.
    pub reset_on_startup: bool,
}

impl DatabaseConfig {
    /// Converts to the pool settings used by the shared crate
    ///
    /// An in-memory URL always maps to a single-connection pool, since each
    /// extra connection would see its own empty database.
    pub fn pool_config(&self) -> pool::DatabaseConfig {
        if self.url == pool::IN_MEMORY_URL {
            return pool::DatabaseConfig::in_memory();
        }

        pool::DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: 1,
            ..Default::default()
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Environment variables have unparseable values
    /// - Parsed values fail validation
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let log_format = env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .parse::<LogFormat>()?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| pool::DatabaseConfig::default().url);

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()?;

        let reset_on_startup = parse_bool(
            "DATABASE_RESET_ON_STARTUP",
            &env::var("DATABASE_RESET_ON_STARTUP").unwrap_or_else(|_| "true".to_string()),
        )?;

        let config = Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
                log_format,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                reset_on_startup,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates every section
    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.api.validate()?;
        self.database.validate()
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// True if any origin may call the API
    pub fn cors_allows_any(&self) -> bool {
        self.api.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(name: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be a boolean, got '{}'", name, other),
    }
}
