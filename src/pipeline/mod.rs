//! LOAD → COMPUTE → PERSIST orchestration for one scoring run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::analytics::{completion_rate, executive_summary, portfolio_metrics, HealthEngine};
use crate::error::{PipelineError, StoreError};
use crate::metrics::Metrics;
use crate::store::{
    ArtifactStore, DatasetStore, FINANCIAL_DATASET, INITIATIVES_DATASET, OPERATIONAL_DATASET,
};

/// What one completed run produced, with the portfolio headline numbers.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_at: DateTime<Utc>,
    pub initiatives_scored: usize,
    pub at_risk_count: usize,
    pub portfolio_roi: f64,
    pub budget_utilization_rate: f64,
    pub completion_rate: f64,
    pub artifacts_written: usize,
    pub duration_ms: u64,
}

/// One-shot batch orchestrator. Fails closed: artifacts are written only
/// after every computation stage succeeds.
pub struct Pipeline {
    datasets: Arc<dyn DatasetStore>,
    artifacts: Arc<dyn ArtifactStore>,
    metrics: Option<Arc<Metrics>>,
}

impl Pipeline {
    pub fn new(datasets: Arc<dyn DatasetStore>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            datasets,
            artifacts,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run the three stages against the latest snapshots, stamping every
    /// derived timestamp and artifact name from the injected `now`.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunReport, PipelineError> {
        let started = Instant::now();
        let result = self.run_stages(now, started).await;

        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(report) => {
                    metrics.pipeline_runs_total.inc();
                    metrics
                        .pipeline_run_duration_seconds
                        .observe(started.elapsed().as_secs_f64());
                    metrics.initiatives_scored.set(report.initiatives_scored as i64);
                    metrics.at_risk_initiatives.set(report.at_risk_count as i64);
                }
                Err(_) => metrics.pipeline_failures_total.inc(),
            }
        }

        result
    }

    async fn run_stages(
        &self,
        now: DateTime<Utc>,
        started: Instant,
    ) -> Result<RunReport, PipelineError> {
        info!("Pipeline run started");

        // LOAD. Every required dataset is probed before aborting so the
        // error names all missing datasets at once. A snapshot that exists
        // but fails decode is fatal for initiatives (nothing can be scored)
        // and downgraded to empty for the metric series.
        let mut missing: Vec<String> = Vec::new();

        let initiatives = match self.datasets.load_initiatives().await {
            Ok(Some(records)) => {
                info!(dataset = INITIATIVES_DATASET, records = records.len(), "Loaded dataset");
                Some(records)
            }
            Ok(None) => {
                missing.push(INITIATIVES_DATASET.to_string());
                None
            }
            Err(err) => return Err(err.into()),
        };

        let financial = match self.datasets.load_financial_metrics().await {
            Ok(Some(records)) => {
                info!(dataset = FINANCIAL_DATASET, records = records.len(), "Loaded dataset");
                Some(records)
            }
            Ok(None) => {
                missing.push(FINANCIAL_DATASET.to_string());
                None
            }
            Err(StoreError::Schema { dataset, source }) => {
                warn!(
                    dataset = %dataset,
                    error = %source,
                    "Metric dataset failed decode, scoring with defaults"
                );
                Some(Vec::new())
            }
            Err(err) => return Err(err.into()),
        };

        let operational = match self.datasets.load_operational_metrics().await {
            Ok(Some(records)) => {
                info!(dataset = OPERATIONAL_DATASET, records = records.len(), "Loaded dataset");
                Some(records)
            }
            Ok(None) => {
                missing.push(OPERATIONAL_DATASET.to_string());
                None
            }
            Err(StoreError::Schema { dataset, source }) => {
                warn!(
                    dataset = %dataset,
                    error = %source,
                    "Metric dataset failed decode, scoring with defaults"
                );
                Some(Vec::new())
            }
            Err(err) => return Err(err.into()),
        };

        if !missing.is_empty() {
            return Err(PipelineError::MissingInput { missing });
        }
        let initiatives = initiatives.unwrap_or_default();
        let financial = financial.unwrap_or_default();
        let operational = operational.unwrap_or_default();

        // COMPUTE
        let health = HealthEngine::score_initiatives(&initiatives, &financial, &operational, now);
        let portfolio = portfolio_metrics(&health, &financial, now);
        let summary = executive_summary(&portfolio);
        let at_risk_count = portfolio.at_risk_initiatives.count;

        // PERSIST
        let path = self.artifacts.write_initiative_health(&health, now).await?;
        info!(path = %path.display(), rows = health.len(), "Initiative health artifact written");

        let path = self.artifacts.write_executive_summary(&summary, now).await?;
        info!(path = %path.display(), rows = summary.len(), "Executive summary artifact written");

        let path = self.artifacts.write_portfolio_metrics(&portfolio, now).await?;
        info!(path = %path.display(), "Portfolio metrics artifact written");

        let report = RunReport {
            run_at: now,
            initiatives_scored: health.len(),
            at_risk_count,
            portfolio_roi: portfolio.portfolio_roi,
            budget_utilization_rate: portfolio.budget_utilization_rate,
            completion_rate: completion_rate(&portfolio),
            artifacts_written: 3,
            duration_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            initiatives_scored = report.initiatives_scored,
            at_risk = report.at_risk_count,
            artifacts = report.artifacts_written,
            duration_ms = report.duration_ms,
            "Pipeline run completed"
        );
        Ok(report)
    }
}
