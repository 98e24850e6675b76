//! HTTP client for the transformation data-source API.

use backon::{ExponentialBuilder, Retryable};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::error::CollectError;
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};

const MAX_RETRY_ATTEMPTS: usize = 3;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Health payload reported by the source API.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceHealth {
    pub status: String,
    #[serde(default)]
    pub initiatives_count: usize,
}

/// Thin typed client over the source API endpoints. Transient HTTP failures
/// retry with exponential backoff; non-success statuses do not.
#[derive(Debug, Clone)]
pub struct SourceApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SourceApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CollectError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let fetch = || async {
            let mut request = self
                .client
                .get(&url)
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
            if !query.is_empty() {
                request = request.query(query);
            }
            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(CollectError::Status {
                    endpoint: endpoint.to_string(),
                    status: response.status(),
                });
            }
            Ok(response.json::<T>().await?)
        };

        fetch
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRY_ATTEMPTS))
            .when(|err| matches!(err, CollectError::Http(_)))
            .notify(|err, delay| {
                warn!(
                    endpoint = endpoint,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying source API request"
                );
            })
            .await
    }

    pub async fn health(&self) -> Result<SourceHealth, CollectError> {
        self.get_json("/health", &[]).await
    }

    pub async fn fetch_initiatives(&self) -> Result<Vec<Initiative>, CollectError> {
        self.get_json("/initiatives", &[]).await
    }

    pub async fn fetch_financial_metrics(
        &self,
        days_back: u32,
    ) -> Result<Vec<FinancialMetric>, CollectError> {
        self.get_json("/financial-metrics", &[("days_back", days_back.to_string())])
            .await
    }

    pub async fn fetch_operational_metrics(
        &self,
        days_back: u32,
    ) -> Result<Vec<OperationalMetric>, CollectError> {
        self.get_json(
            "/operational-metrics",
            &[("days_back", days_back.to_string())],
        )
        .await
    }
}
