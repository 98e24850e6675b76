//! Health scoring, risk tagging, and portfolio-level rollups.

pub mod engine;
pub mod portfolio;
pub mod risk;
pub mod summary;

pub use engine::HealthEngine;
pub use portfolio::portfolio_metrics;
pub use risk::{identify_risk_factors, predicted_completion_date};
pub use summary::{completion_rate, executive_summary};
