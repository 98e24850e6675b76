//! Portfolio rollup and executive summary shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::initiative::InitiativeType;

/// Initiative counts per health classification band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDistribution {
    pub excellent: usize,
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

/// The at-risk bucket: everything scoring below the at-risk threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtRiskSummary {
    pub count: usize,
    pub total_budget: f64,
    pub names: Vec<String>,
}

/// Per-category averages, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePerformance {
    pub health_score: f64,
    pub budget_allocated: f64,
    pub roi_percentage: Option<f64>,
}

/// Initiatives predicted to finish within the 30-day window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpcomingCompletions {
    pub count: usize,
    pub names: Vec<String>,
}

/// One rollup over the whole portfolio, produced once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub computed_at: DateTime<Utc>,
    pub total_initiatives: usize,
    pub active_initiatives: usize,
    pub completed_initiatives: usize,
    pub total_budget_allocated: f64,
    pub total_budget_spent: f64,
    pub budget_utilization_rate: f64,
    pub total_financial_impact: f64,
    pub portfolio_roi: f64,
    pub health_distribution: HealthDistribution,
    pub at_risk_initiatives: AtRiskSummary,
    pub performance_by_type: BTreeMap<InitiativeType, TypePerformance>,
    pub upcoming_completions: UpcomingCompletions,
}

/// Status classification of one executive summary KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiStatus {
    Good,
    Warning,
    Critical,
}

impl KpiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiStatus::Good => "Good",
            KpiStatus::Warning => "Warning",
            KpiStatus::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the fixed 4-row executive digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummaryRow {
    pub metric_name: String,
    pub current_value: String,
    pub status: KpiStatus,
    pub description: String,
    pub action_required: String,
}
