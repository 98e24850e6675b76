//! Error taxonomy shared across the scoring pipeline.

use thiserror::Error;

/// Errors surfaced by snapshot and artifact storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A dataset file exists but its records fail structural decode
    /// (a required identity or date field is absent or mistyped).
    #[error("dataset '{dataset}' failed structural decode: {source}")]
    Schema {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by one pipeline run.
///
/// A run either completes and persists all three artifacts or fails with one
/// of these and persists none.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fewer than the three required datasets were present. Raised before any
    /// computation; lists every missing dataset name.
    #[error("missing required datasets: {}", missing.join(", "))]
    MissingInput { missing: Vec<String> },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by the source-API client and the collector.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("source API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("source API returned status {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
