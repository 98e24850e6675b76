//! Snapshot and artifact storage behind the two pipeline-facing traits.

pub mod fs;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StoreError;
use crate::models::health::InitiativeHealth;
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};
use crate::models::portfolio::{ExecutiveSummaryRow, PortfolioMetrics};

pub use fs::FsStore;

pub const INITIATIVES_DATASET: &str = "initiatives";
pub const FINANCIAL_DATASET: &str = "financial_metrics";
pub const OPERATIONAL_DATASET: &str = "operational_metrics";

pub const INITIATIVE_HEALTH_ARTIFACT: &str = "initiative_health";
pub const EXECUTIVE_SUMMARY_ARTIFACT: &str = "executive_summary";
pub const PORTFOLIO_METRICS_ARTIFACT: &str = "portfolio_metrics";

/// One collected copy of a dataset, with envelope metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSnapshot<T> {
    pub dataset: String,
    pub collected_at: DateTime<Utc>,
    pub source: String,
    pub records: Vec<T>,
}

impl<T> DatasetSnapshot<T> {
    pub fn new(
        dataset: &str,
        source: &str,
        collected_at: DateTime<Utc>,
        records: Vec<T>,
    ) -> Self {
        Self {
            dataset: dataset.to_string(),
            collected_at,
            source: source.to_string(),
            records,
        }
    }
}

/// Read side of the pipeline: the latest snapshot of each named dataset.
///
/// `Ok(None)` means the dataset has never been collected; a present but
/// undecodable snapshot is a [`StoreError::Schema`].
#[async_trait]
pub trait DatasetStore: Send + Sync {
    async fn load_initiatives(&self) -> Result<Option<Vec<Initiative>>, StoreError>;
    async fn load_financial_metrics(&self) -> Result<Option<Vec<FinancialMetric>>, StoreError>;
    async fn load_operational_metrics(&self)
        -> Result<Option<Vec<OperationalMetric>>, StoreError>;

    async fn save_initiatives(
        &self,
        snapshot: &DatasetSnapshot<Initiative>,
    ) -> Result<(), StoreError>;
    async fn save_financial_metrics(
        &self,
        snapshot: &DatasetSnapshot<FinancialMetric>,
    ) -> Result<(), StoreError>;
    async fn save_operational_metrics(
        &self,
        snapshot: &DatasetSnapshot<OperationalMetric>,
    ) -> Result<(), StoreError>;
}

/// Write side of the pipeline: one named artifact per output table.
///
/// Each write lands the timestamped copy first, then replaces the `latest`
/// pointer. Returns the path of the timestamped copy.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn write_initiative_health(
        &self,
        rows: &[InitiativeHealth],
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError>;

    async fn write_executive_summary(
        &self,
        rows: &[ExecutiveSummaryRow],
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError>;

    async fn write_portfolio_metrics(
        &self,
        metrics: &PortfolioMetrics,
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError>;
}
