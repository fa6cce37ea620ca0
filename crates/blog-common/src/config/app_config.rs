//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub ids: IdConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where blogs and entries are kept
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// PostgreSQL via the connection pool
    Postgres(DatabaseConfig),
    /// Process-local store, lost on restart
    Memory,
}

impl StorageConfig {
    #[must_use]
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations on startup
    pub run_migrations: bool,
    pub migrations_dir: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Id generator configuration
#[derive(Debug, Clone, Default)]
pub struct IdConfig {
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "blog-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match var("STORAGE_BACKEND").as_deref().map(str::to_lowercase) {
            None => StorageConfig::Postgres(Self::database_from(&var)?),
            Some(backend) => match backend.as_str() {
                "postgres" => StorageConfig::Postgres(Self::database_from(&var)?),
                "memory" => StorageConfig::Memory,
                _ => return Err(ConfigError::InvalidValue("STORAGE_BACKEND", backend)),
            },
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: match var("APP_ENV") {
                    None => Environment::default(),
                    Some(raw) => {
                        Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?
                    }
                },
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&var, "API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            storage,
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&var, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&var, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            ids: IdConfig {
                worker_id: parse_var(&var, "WORKER_ID")?.unwrap_or(0),
            },
        })
    }

    fn database_from<F>(var: &F) -> Result<DatabaseConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(DatabaseConfig {
            url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
            max_connections: parse_var(var, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or_else(default_max_connections),
            min_connections: parse_var(var, "DATABASE_MIN_CONNECTIONS")?
                .unwrap_or_else(default_min_connections),
            run_migrations: parse_var(var, "DATABASE_RUN_MIGRATIONS")?.unwrap_or(false),
            migrations_dir: var("DATABASE_MIGRATIONS_DIR").unwrap_or_else(default_migrations_dir),
        })
    }
}

/// Look up `key` and parse it; a present but unparsable value is an error
fn parse_var<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
