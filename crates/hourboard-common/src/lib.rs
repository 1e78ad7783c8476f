//! # hourboard-common
//!
//! Shared utilities including configuration, error handling, identity-token
//! verification, and telemetry.

pub mod config;
pub mod error;
pub mod identity;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, ConsistencyConfig, CorsConfig, DatabaseConfig,
    Environment, IdentityConfig, RateLimitConfig, RequestConfig, ServerConfig, StoreBackend,
    StoreConfig, TagConfig,
};
pub use error::{domain_error_details, domain_status_code, AppError, ErrorResponse};
pub use identity::{Identity, IdentityClaims, IdentityTokenService};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
