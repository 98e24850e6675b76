//! The closed set of validation rules the gate evaluates.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

pub const MIN_ALLOCATED_BUDGET: f64 = 10_000.0;
pub const MAX_ALLOCATED_BUDGET: f64 = 5_000_000.0;
pub const MAX_SPENT_BUDGET: f64 = 10_000_000.0;
pub const SPENT_OVERRUN_TOLERANCE: f64 = 1.2;
pub const MIN_ROI_PERCENTAGE: f64 = -50.0;
pub const MAX_ROI_PERCENTAGE: f64 = 100.0;
pub const MAX_REVENUE_IMPACT: f64 = 1_000_000.0;
pub const MAX_COST_REDUCTION: f64 = 500_000.0;
pub const MAX_EFFICIENCY_GAIN: f64 = 50.0;
pub const MAX_QUALITY_SCORE: f64 = 100.0;
pub const MAX_SATISFACTION: f64 = 10.0;
pub const EARLIEST_METRIC_YEAR: i32 = 2023;

/// Samples older than this predate the program and indicate a bad export.
pub fn earliest_metric_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(EARLIEST_METRIC_YEAR, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// One named validation predicate with its typed bounds.
///
/// The set is closed: the gate never evaluates free-form expressions, only
/// these variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum QualityRule {
    UniqueInitiativeIds,
    AllocatedBudgetInRange { min: f64, max: f64 },
    SpentBudgetInRange { min: f64, max: f64 },
    SpentWithinOverrunTolerance { tolerance: f64 },
    StartBeforeTargetEnd,
    RoiInRange { min: f64, max: f64 },
    RevenueImpactInRange { min: f64, max: f64 },
    CostReductionInRange { min: f64, max: f64 },
    NonNegativeBurnRate,
    DateNotBefore { earliest: DateTime<Utc> },
    EfficiencyGainInRange { min: f64, max: f64 },
    QualityScoreInRange { min: f64, max: f64 },
    SatisfactionInRange { min: f64, max: f64 },
}

impl QualityRule {
    pub fn label(&self) -> &'static str {
        match self {
            QualityRule::UniqueInitiativeIds => "unique_initiative_ids",
            QualityRule::AllocatedBudgetInRange { .. } => "allocated_budget_in_range",
            QualityRule::SpentBudgetInRange { .. } => "spent_budget_in_range",
            QualityRule::SpentWithinOverrunTolerance { .. } => "spent_within_overrun_tolerance",
            QualityRule::StartBeforeTargetEnd => "start_before_target_end",
            QualityRule::RoiInRange { .. } => "roi_in_range",
            QualityRule::RevenueImpactInRange { .. } => "revenue_impact_in_range",
            QualityRule::CostReductionInRange { .. } => "cost_reduction_in_range",
            QualityRule::NonNegativeBurnRate => "non_negative_burn_rate",
            QualityRule::DateNotBefore { .. } => "date_not_before",
            QualityRule::EfficiencyGainInRange { .. } => "efficiency_gain_in_range",
            QualityRule::QualityScoreInRange { .. } => "quality_score_in_range",
            QualityRule::SatisfactionInRange { .. } => "satisfaction_in_range",
        }
    }
}

impl std::fmt::Display for QualityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
