//! Pre-flight data-quality gate run between collection and scoring.

pub mod gate;
pub mod rules;

pub use gate::{
    validate_financial_metrics, validate_initiatives, validate_operational_metrics, QualityReport,
    Violation,
};
pub use rules::QualityRule;
