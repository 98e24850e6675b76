//! Filesystem store: JSON snapshots under `raw/`, artifacts under `processed/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::models::health::InitiativeHealth;
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};
use crate::models::portfolio::{ExecutiveSummaryRow, PortfolioMetrics};
use crate::quality::QualityReport;
use crate::store::{
    ArtifactStore, DatasetSnapshot, DatasetStore, EXECUTIVE_SUMMARY_ARTIFACT, FINANCIAL_DATASET,
    INITIATIVES_DATASET, INITIATIVE_HEALTH_ARTIFACT, OPERATIONAL_DATASET,
    PORTFOLIO_METRICS_ARTIFACT,
};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Store rooted at a data directory, split into `raw/` and `processed/`.
#[derive(Debug, Clone)]
pub struct FsStore {
    data_dir: PathBuf,
}

impl FsStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }

    /// Write through a tempfile in the target directory, then rename into
    /// place, so readers never observe a partially written file.
    fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn write_snapshot<T: Serialize>(
        &self,
        dataset: &str,
        snapshot: &DatasetSnapshot<T>,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let dir = self.raw_dir();
        let stamp = snapshot.collected_at.format(TIMESTAMP_FORMAT);
        Self::atomic_write(&dir.join(format!("{dataset}_{stamp}.json")), &json)?;
        Self::atomic_write(&dir.join(format!("{dataset}_latest.json")), &json)?;
        debug!(
            dataset = dataset,
            records = snapshot.records.len(),
            "Snapshot persisted"
        );
        Ok(())
    }

    fn read_snapshot<T: DeserializeOwned>(
        &self,
        dataset: &str,
    ) -> Result<Option<Vec<T>>, StoreError> {
        let path = self.raw_dir().join(format!("{dataset}_latest.json"));
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: DatasetSnapshot<T> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Schema {
                dataset: dataset.to_string(),
                source,
            })?;
        Ok(Some(snapshot.records))
    }

    fn write_artifact<T: Serialize + ?Sized>(
        &self,
        name: &str,
        payload: &T,
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_vec_pretty(payload)?;
        let dir = self.processed_dir();
        let stamped = dir.join(format!("{name}_{}.json", run_at.format(TIMESTAMP_FORMAT)));
        Self::atomic_write(&stamped, &json)?;
        Self::atomic_write(&dir.join(format!("{name}_latest.json")), &json)?;
        debug!(artifact = name, path = %stamped.display(), "Artifact persisted");
        Ok(stamped)
    }

    /// Quality reports are advisory telemetry: timestamped copies only, no
    /// `latest` pointer.
    pub fn write_quality_report(&self, report: &QualityReport) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_vec_pretty(report)?;
        let path = self.data_dir.join("quality_reports").join(format!(
            "quality_report_{}_{}.json",
            report.dataset,
            report.checked_at.format(TIMESTAMP_FORMAT)
        ));
        Self::atomic_write(&path, &json)?;
        debug!(dataset = %report.dataset, path = %path.display(), "Quality report persisted");
        Ok(path)
    }
}

#[async_trait]
impl DatasetStore for FsStore {
    async fn load_initiatives(&self) -> Result<Option<Vec<Initiative>>, StoreError> {
        self.read_snapshot(INITIATIVES_DATASET)
    }

    async fn load_financial_metrics(&self) -> Result<Option<Vec<FinancialMetric>>, StoreError> {
        self.read_snapshot(FINANCIAL_DATASET)
    }

    async fn load_operational_metrics(
        &self,
    ) -> Result<Option<Vec<OperationalMetric>>, StoreError> {
        self.read_snapshot(OPERATIONAL_DATASET)
    }

    async fn save_initiatives(
        &self,
        snapshot: &DatasetSnapshot<Initiative>,
    ) -> Result<(), StoreError> {
        self.write_snapshot(INITIATIVES_DATASET, snapshot)
    }

    async fn save_financial_metrics(
        &self,
        snapshot: &DatasetSnapshot<FinancialMetric>,
    ) -> Result<(), StoreError> {
        self.write_snapshot(FINANCIAL_DATASET, snapshot)
    }

    async fn save_operational_metrics(
        &self,
        snapshot: &DatasetSnapshot<OperationalMetric>,
    ) -> Result<(), StoreError> {
        self.write_snapshot(OPERATIONAL_DATASET, snapshot)
    }
}

#[async_trait]
impl ArtifactStore for FsStore {
    async fn write_initiative_health(
        &self,
        rows: &[InitiativeHealth],
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        self.write_artifact(INITIATIVE_HEALTH_ARTIFACT, rows, run_at)
    }

    async fn write_executive_summary(
        &self,
        rows: &[ExecutiveSummaryRow],
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        self.write_artifact(EXECUTIVE_SUMMARY_ARTIFACT, rows, run_at)
    }

    async fn write_portfolio_metrics(
        &self,
        metrics: &PortfolioMetrics,
        run_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        self.write_artifact(PORTFOLIO_METRICS_ARTIFACT, metrics, run_at)
    }
}
