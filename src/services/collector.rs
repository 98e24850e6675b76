//! Pulls all three datasets from the source API and snapshots them.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::error::CollectError;
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};
use crate::services::source_api::SourceApiClient;
use crate::store::{
    DatasetSnapshot, DatasetStore, FINANCIAL_DATASET, INITIATIVES_DATASET, OPERATIONAL_DATASET,
};

/// Source label stamped into every snapshot envelope.
pub const SOURCE_LABEL: &str = "source_api";

/// One full collection: all three datasets, in memory, already persisted.
#[derive(Debug, Clone)]
pub struct CollectedDatasets {
    pub initiatives: Vec<Initiative>,
    pub financial: Vec<FinancialMetric>,
    pub operational: Vec<OperationalMetric>,
}

impl CollectedDatasets {
    pub fn total_records(&self) -> usize {
        self.initiatives.len() + self.financial.len() + self.operational.len()
    }
}

pub struct Collector {
    client: SourceApiClient,
    store: Arc<dyn DatasetStore>,
    days_back: u32,
}

impl Collector {
    pub fn new(client: SourceApiClient, store: Arc<dyn DatasetStore>, days_back: u32) -> Self {
        Self {
            client,
            store,
            days_back,
        }
    }

    /// Collect every dataset, persisting each snapshot as it lands. Fails on
    /// the first dataset that cannot be fetched or stored.
    pub async fn collect_all(&self, now: DateTime<Utc>) -> Result<CollectedDatasets, CollectError> {
        let started = Instant::now();
        let health = self.client.health().await?;
        info!(
            status = %health.status,
            initiatives = health.initiatives_count,
            "Source API reachable"
        );

        let snapshot = DatasetSnapshot::new(
            INITIATIVES_DATASET,
            SOURCE_LABEL,
            now,
            self.client.fetch_initiatives().await?,
        );
        self.store.save_initiatives(&snapshot).await?;
        info!(records = snapshot.records.len(), "Collected initiatives");
        let initiatives = snapshot.records;

        let snapshot = DatasetSnapshot::new(
            FINANCIAL_DATASET,
            SOURCE_LABEL,
            now,
            self.client.fetch_financial_metrics(self.days_back).await?,
        );
        self.store.save_financial_metrics(&snapshot).await?;
        info!(
            records = snapshot.records.len(),
            days_back = self.days_back,
            "Collected financial metrics"
        );
        let financial = snapshot.records;

        let snapshot = DatasetSnapshot::new(
            OPERATIONAL_DATASET,
            SOURCE_LABEL,
            now,
            self.client.fetch_operational_metrics(self.days_back).await?,
        );
        self.store.save_operational_metrics(&snapshot).await?;
        info!(
            records = snapshot.records.len(),
            days_back = self.days_back,
            "Collected operational metrics"
        );
        let operational = snapshot.records;

        let collected = CollectedDatasets {
            initiatives,
            financial,
            operational,
        };
        info!(
            total_records = collected.total_records(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Full collection completed"
        );
        Ok(collected)
    }
}
