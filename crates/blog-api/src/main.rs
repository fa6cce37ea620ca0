//! Blog API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p blog-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use blog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        memory = config.storage.is_memory(),
        "Starting Blog API Server..."
    );

    // Run the server
    if let Err(e) = blog_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
