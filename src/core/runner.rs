//! One collect → validate → score cycle, shared by the worker and one-shot runs.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::metrics::Metrics;
use crate::pipeline::{Pipeline, RunReport};
use crate::quality;
use crate::services::{CollectedDatasets, Collector};
use crate::store::FsStore;

/// Bundles the collector, quality gate, and pipeline into one runnable cycle.
///
/// Without a collector the cycle scores whatever snapshots are already on
/// disk, which is how `SKIP_COLLECT` one-shot runs and tests drive it.
pub struct PipelineRunner {
    store: Arc<FsStore>,
    pipeline: Pipeline,
    collector: Option<Collector>,
    metrics: Option<Arc<Metrics>>,
}

impl PipelineRunner {
    pub fn new(store: Arc<FsStore>, pipeline: Pipeline) -> Self {
        Self {
            store,
            pipeline,
            collector: None,
            metrics: None,
        }
    }

    pub fn with_collector(mut self, collector: Collector) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Collect fresh snapshots (when configured), gate them, then score.
    /// A failed collection fails the whole cycle; stale snapshots are never
    /// scored silently.
    pub async fn run_once(
        &self,
        now: DateTime<Utc>,
    ) -> Result<RunReport, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(collector) = &self.collector {
            match collector.collect_all(now).await {
                Ok(collected) => {
                    if let Some(metrics) = &self.metrics {
                        metrics.collection_runs_total.inc();
                    }
                    self.run_quality_gate(&collected, now);
                }
                Err(err) => {
                    if let Some(metrics) = &self.metrics {
                        metrics.collection_failures_total.inc();
                    }
                    return Err(err.into());
                }
            }
        }

        let report = self.pipeline.run(now).await?;
        Ok(report)
    }

    /// The gate is advisory: verdicts are logged and persisted, but even a
    /// failed dataset proceeds to scoring because the scorer's guards make
    /// out-of-range values safe.
    fn run_quality_gate(&self, collected: &CollectedDatasets, now: DateTime<Utc>) {
        let reports = [
            quality::validate_initiatives(&collected.initiatives, now),
            quality::validate_financial_metrics(&collected.financial, now),
            quality::validate_operational_metrics(&collected.operational, now),
        ];

        for report in reports {
            if report.passed {
                info!(
                    dataset = %report.dataset,
                    records = report.record_count,
                    "Quality gate passed"
                );
            } else {
                warn!(
                    dataset = %report.dataset,
                    records = report.record_count,
                    violations = report.violations.len(),
                    "Quality gate found violations"
                );
                for violation in &report.violations {
                    warn!(
                        dataset = %report.dataset,
                        rule = %violation.rule,
                        count = violation.count,
                        "Rule violated"
                    );
                }
            }

            if let Err(err) = self.store.write_quality_report(&report) {
                warn!(
                    dataset = %report.dataset,
                    error = %err,
                    "Failed to persist quality report"
                );
            }
        }
    }
}
