//! Pure sub-score functions, one module per factor

pub mod budget;
pub mod financial;
pub mod operational;
pub mod schedule;

pub use budget::{budget_score, budget_utilization, MAX_BUDGET_SCORE};
pub use financial::{financial_score, DEFAULT_ROI, MAX_FINANCIAL_SCORE};
pub use operational::{operational_score, MAX_OPERATIONAL_SCORE};
pub use schedule::{days_since_start, planned_duration, time_progress, time_score, MAX_TIME_SCORE};
