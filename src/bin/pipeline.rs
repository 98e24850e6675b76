//! PortoPulse Pipeline
//!
//! One-shot collect + score run. Collects fresh snapshots from the source
//! API unless `SKIP_COLLECT=true`, scores the latest snapshots on disk, and
//! writes the three analytics artifacts. Exits non-zero on failure.

use chrono::Utc;
use dotenvy::dotenv;
use portopulse::config;
use portopulse::core::runner::PipelineRunner;
use portopulse::logging;
use portopulse::pipeline::Pipeline;
use portopulse::services::{Collector, SourceApiClient};
use portopulse::store::FsStore;
use std::env;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let skip_collect = env::var("SKIP_COLLECT")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);

    let env = config::get_environment();
    info!("Starting PortoPulse Pipeline (one-shot)");
    info!(environment = %env, "Environment");

    let data_dir = config::get_data_dir();
    let store = Arc::new(FsStore::new(data_dir.clone()));
    info!(data_dir = %data_dir.display(), "Data directory: {}", data_dir.display());

    let pipeline = Pipeline::new(store.clone(), store.clone());
    let mut runner = PipelineRunner::new(store.clone(), pipeline);
    if skip_collect {
        info!("SKIP_COLLECT set, scoring existing snapshots");
    } else {
        let source_url = config::get_source_api_url();
        let days_back = config::get_collection_days_back();
        info!(source_url = %source_url, days_back = days_back, "Source API: {}", source_url);
        runner = runner.with_collector(Collector::new(
            SourceApiClient::new(source_url),
            store,
            days_back,
        ));
    }

    let report = match runner.run_once(Utc::now()).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            std::process::exit(1);
        }
    };

    info!(
        initiatives_scored = report.initiatives_scored,
        artifacts = report.artifacts_written,
        duration_ms = report.duration_ms,
        "Pipeline run succeeded"
    );
    info!(roi = report.portfolio_roi, "Portfolio ROI: {:.1}%", report.portfolio_roi);
    info!(
        rate = report.budget_utilization_rate,
        "Budget utilization: {:.1}%", report.budget_utilization_rate
    );
    info!(count = report.at_risk_count, "At-risk initiatives: {}", report.at_risk_count);
    info!(
        rate = report.completion_rate,
        "Completion rate: {:.1}%", report.completion_rate
    );

    Ok(())
}
