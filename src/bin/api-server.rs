//! PortoPulse Source API Server
//!
//! HTTP server exposing generated initiative, financial, and operational
//! datasets plus health check and metrics endpoints. This service is
//! stateless and can be horizontally scaled.

use dotenvy::dotenv;
use portopulse::config;
use portopulse::core::http::start_server;
use portopulse::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let port = config::get_api_port();
    let env = config::get_environment();
    info!("Starting PortoPulse Source API");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!("This service is stateless and can be horizontally scaled");

    // Start HTTP server
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    info!("Source API started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down source API...");
            info!("Source API stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
