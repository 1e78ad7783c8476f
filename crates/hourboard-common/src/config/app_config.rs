//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub store: StoreConfig,
    pub identity: IdentityConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub consistency: ConsistencyConfig,
    pub requests: RequestConfig,
    pub tags: TagConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
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
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which document-store adapter backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    #[default]
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Present when the backend is postgres
    pub database: Option<DatabaseConfig>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Identity-token verification
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub secret: String,
    /// Clock skew tolerated on `exp`, in seconds
    #[serde(default = "default_token_leeway")]
    pub leeway_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Hardening switches for the read-modify-write workflows
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConsistencyConfig {
    /// Atomic hour increment and compare-and-swap toggle; false restores
    /// the legacy read-then-write behaviour
    #[serde(default = "default_true")]
    pub atomic_updates: bool,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            atomic_updates: true,
        }
    }
}

/// Advisor-request behaviour
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RequestConfig {
    /// Reject a second pending request from the same user
    #[serde(default = "default_true")]
    pub single_pending: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            single_pending: true,
        }
    }
}

/// Controlled tag vocabulary
#[derive(Debug, Clone, Deserialize)]
pub struct TagConfig {
    #[serde(default = "default_primary_tag")]
    pub primary: String,
    #[serde(default = "default_tag_options")]
    pub options: Vec<String>,
}

impl TagConfig {
    /// Check a tag against the controlled set
    #[must_use]
    pub fn is_allowed(&self, tag: &str) -> bool {
        self.options.iter().any(|t| t == tag)
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_tag(),
            options: default_tag_options(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "hourboard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    2
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_token_leeway() -> u64 {
    60
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

fn default_primary_tag() -> String {
    hourboard_core::PRIMARY_TAG.to_string()
}

fn default_tag_options() -> Vec<String> {
    vec!["NHS".to_string(), "Non-NHS".to_string()]
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Environment lookup with typed parsing
struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn parsed<T>(&self, key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue(key, e.to_string())),
            None => Ok(default()),
        }
    }

    fn flag(&self, key: &'static str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            Some(raw) => parse_bool(&raw).map_err(|e| ConfigError::InvalidValue(key, e)),
            None => Ok(default),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or unparsable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let backend: StoreBackend = vars.parsed("STORE_BACKEND", StoreBackend::default)?;
        let database = match backend {
            StoreBackend::Postgres => Some(DatabaseConfig {
                url: vars.required("DATABASE_URL")?,
                max_connections: vars.parsed("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: vars.parsed("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                migrations_dir: vars
                    .get("MIGRATIONS_DIR")
                    .unwrap_or_else(default_migrations_dir),
            }),
            StoreBackend::Memory => None,
        };

        let tags = TagConfig {
            primary: vars.get("PRIMARY_TAG").unwrap_or_else(default_primary_tag),
            options: vars
                .get("TAG_OPTIONS")
                .map(|s| split_list(&s))
                .unwrap_or_else(default_tag_options),
        };
        if tags.options.is_empty() {
            return Err(ConfigError::InvalidValue(
                "TAG_OPTIONS",
                "at least one tag is required".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env: vars.parsed("APP_ENV", default_env)?,
            },
            api: ServerConfig {
                host: vars.get("API_HOST").unwrap_or_else(default_host),
                port: vars
                    .required("API_PORT")?
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| {
                        ConfigError::InvalidValue("API_PORT", e.to_string())
                    })?,
            },
            store: StoreConfig { backend, database },
            identity: IdentityConfig {
                secret: vars.required("IDENTITY_TOKEN_SECRET")?,
                leeway_secs: vars.parsed("IDENTITY_TOKEN_LEEWAY_SECS", default_token_leeway)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parsed("RATE_LIMIT_REQUESTS_PER_SECOND", default_requests_per_second)?,
                burst: vars.parsed("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s))
                    .unwrap_or_default(),
            },
            consistency: ConsistencyConfig {
                atomic_updates: vars.flag("ATOMIC_UPDATES", true)?,
            },
            requests: RequestConfig {
                single_pending: vars.flag("SINGLE_PENDING_REQUEST", true)?,
            },
            tags,
        })
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
