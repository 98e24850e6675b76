//! PortoPulse
//!
//! Health scoring engine for business transformation portfolios. Collects
//! initiative, financial, and operational datasets from a source API, runs
//! quality checks, scores every initiative on a 0-100 scale, and persists
//! portfolio-level analytics as JSON artifacts.
//!
//! Binaries:
//! - `api-server`: serves generated source datasets over HTTP
//! - `pipeline`: one-shot collect + score run
//! - `worker`: interval-scheduled collect + score runs

pub mod analytics;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod quality;
pub mod scoring;
pub mod services;
pub mod store;
