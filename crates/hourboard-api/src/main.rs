//! Hourboard API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p hourboard-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use hourboard_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the environment picks the format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.store.backend,
        "Starting Hourboard API Server..."
    );

    hourboard_api::run(config).await?;

    Ok(())
}
