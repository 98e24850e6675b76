//! Clients for the services surrounding the scoring pipeline.

pub mod collector;
pub mod source_api;

pub use collector::{CollectedDatasets, Collector};
pub use source_api::{SourceApiClient, SourceHealth};
