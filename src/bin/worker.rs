//! PortoPulse Worker
//!
//! Runs the collect + score cycle on a fixed interval.
//! Can be run as a separate process/instance from the source API server.

use dotenvy::dotenv;
use portopulse::config;
use portopulse::core::runner::PipelineRunner;
use portopulse::core::scheduler::PipelineScheduler;
use portopulse::logging;
use portopulse::metrics::Metrics;
use portopulse::pipeline::Pipeline;
use portopulse::services::{Collector, SourceApiClient};
use portopulse::store::FsStore;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let run_interval: u64 = env::var("RUN_INTERVAL_SECONDS")
        .ok()
        .and_then(|i| i.parse().ok())
        .unwrap_or(0);

    let env = config::get_environment();
    info!("Starting PortoPulse Worker");
    info!(environment = %env, "Environment");

    if run_interval == 0 {
        return Err("RUN_INTERVAL_SECONDS must be > 0 for worker".into());
    }

    // Initialize metrics
    let metrics = Arc::new(Metrics::new()?);

    let data_dir = config::get_data_dir();
    let store = Arc::new(FsStore::new(data_dir.clone()));
    info!(data_dir = %data_dir.display(), "Data directory: {}", data_dir.display());

    let source_url = config::get_source_api_url();
    let days_back = config::get_collection_days_back();
    info!(source_url = %source_url, days_back = days_back, "Source API: {}", source_url);
    info!(
        interval = run_interval,
        "Scoring cycle: every {} seconds", run_interval
    );

    let pipeline = Pipeline::new(store.clone(), store.clone()).with_metrics(metrics.clone());
    let collector = Collector::new(SourceApiClient::new(source_url), store.clone(), days_back);
    let runner = Arc::new(
        PipelineRunner::new(store, pipeline)
            .with_collector(collector)
            .with_metrics(metrics),
    );

    // Initialize and start scheduler
    info!("Starting pipeline scheduler...");
    let scheduler = PipelineScheduler::new(runner, run_interval)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    // Graceful shutdown
    info!("Worker started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            scheduler.stop().await;
            info!("Worker stopped");
        }
    }

    Ok(())
}
