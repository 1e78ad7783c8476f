//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, ConsistencyConfig, CorsConfig, DatabaseConfig,
    Environment, IdentityConfig, RateLimitConfig, RequestConfig, ServerConfig, StoreBackend,
    StoreConfig, TagConfig,
};
