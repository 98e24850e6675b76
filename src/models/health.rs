//! Derived per-initiative health rows and classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::initiative::Initiative;

/// Health score below this is at-risk. The `Critical` classification reads
/// the same constant, so the at-risk bucket and the Critical band can never
/// drift apart.
pub const AT_RISK_THRESHOLD: f64 = 50.0;

/// Classification bands over the composite health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Excellent ≥ 80, Good ≥ 65, Warning ≥ 50, Critical below.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthStatus::Excellent
        } else if score >= 65.0 {
            HealthStatus::Good
        } else if score >= AT_RISK_THRESHOLD {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Warning => "Warning",
            HealthStatus::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tags attached to an initiative by independent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Budget Overrun")]
    BudgetOverrun,
    #[serde(rename = "Schedule Delay")]
    ScheduleDelay,
    #[serde(rename = "Low ROI")]
    LowRoi,
    #[serde(rename = "Team Satisfaction")]
    TeamSatisfaction,
}

impl RiskFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::BudgetOverrun => "Budget Overrun",
            RiskFactor::ScheduleDelay => "Schedule Delay",
            RiskFactor::LowRoi => "Low ROI",
            RiskFactor::TeamSatisfaction => "Team Satisfaction",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-initiative reduction of the daily financial series.
///
/// Sums skip absent samples; the mean is `None` when no sample carried a
/// ROI value (the scorer substitutes its neutral default).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialAggregate {
    pub revenue_impact: f64,
    pub cost_reduction: f64,
    pub roi_percentage: Option<f64>,
}

/// Per-initiative reduction of the daily operational series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OperationalAggregate {
    pub efficiency_gain: Option<f64>,
    pub quality_score: Option<f64>,
    pub employee_satisfaction: Option<f64>,
}

/// One scored initiative: the source row plus every derived field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiativeHealth {
    #[serde(flatten)]
    pub initiative: Initiative,
    pub budget_utilization: f64,
    pub budget_score: f64,
    pub days_since_start: i64,
    pub total_duration: i64,
    pub time_progress: f64,
    pub time_score: f64,
    pub revenue_impact: f64,
    pub cost_reduction: f64,
    pub roi_percentage: Option<f64>,
    pub financial_score: f64,
    pub efficiency_gain_percentage: Option<f64>,
    pub quality_score: Option<f64>,
    pub employee_satisfaction: Option<f64>,
    pub operational_score: f64,
    pub health_score: f64,
    pub health_status: HealthStatus,
    pub predicted_completion_date: DateTime<Utc>,
    pub risk_factors: Vec<RiskFactor>,
}

impl InitiativeHealth {
    pub fn is_at_risk(&self) -> bool {
        self.health_score < AT_RISK_THRESHOLD
    }
}
