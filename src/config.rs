//! Environment-variable configuration shared by the binaries.

use std::env;
use std::path::PathBuf;

use crate::generator::DEFAULT_INITIATIVE_COUNT;

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

pub fn get_api_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000)
}

/// Base URL the collector uses to reach the source API.
pub fn get_source_api_url() -> String {
    env::var("SOURCE_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Root directory for snapshots (`raw/`), artifacts (`processed/`), and
/// quality reports.
pub fn get_data_dir() -> PathBuf {
    env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// How many days of metric history to request per collection.
pub fn get_collection_days_back() -> u32 {
    env::var("COLLECTION_DAYS_BACK")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// How many initiatives the source API generates for its cache.
pub fn get_initiative_count() -> usize {
    env::var("INITIATIVE_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INITIATIVE_COUNT)
}
