//! Per-dataset validation passes producing a pass/fail report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};
use crate::quality::rules::{
    earliest_metric_date, QualityRule, MAX_ALLOCATED_BUDGET, MAX_COST_REDUCTION,
    MAX_EFFICIENCY_GAIN, MAX_QUALITY_SCORE, MAX_REVENUE_IMPACT, MAX_ROI_PERCENTAGE,
    MAX_SATISFACTION, MAX_SPENT_BUDGET, MIN_ALLOCATED_BUDGET, MIN_ROI_PERCENTAGE,
    SPENT_OVERRUN_TOLERANCE,
};
use crate::store::{FINANCIAL_DATASET, INITIATIVES_DATASET, OPERATIONAL_DATASET};

/// One violated rule with the number of offending records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub rule: QualityRule,
    pub count: usize,
}

/// Outcome of validating one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub dataset: String,
    pub checked_at: DateTime<Utc>,
    pub record_count: usize,
    pub passed: bool,
    pub violations: Vec<Violation>,
}

impl QualityReport {
    fn new(
        dataset: &str,
        checked_at: DateTime<Utc>,
        record_count: usize,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            dataset: dataset.to_string(),
            checked_at,
            record_count,
            passed: violations.is_empty(),
            violations,
        }
    }
}

fn record(violations: &mut Vec<Violation>, rule: QualityRule, count: usize) {
    if count > 0 {
        violations.push(Violation { rule, count });
    }
}

/// Validate the initiative table: identity uniqueness, budget plausibility,
/// date ordering.
pub fn validate_initiatives(records: &[Initiative], checked_at: DateTime<Utc>) -> QualityReport {
    let mut violations = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    let duplicates = records
        .iter()
        .filter(|r| !seen.insert(r.initiative_id.as_str()))
        .count();
    record(&mut violations, QualityRule::UniqueInitiativeIds, duplicates);

    let allocated_out = records
        .iter()
        .filter(|r| !(MIN_ALLOCATED_BUDGET..=MAX_ALLOCATED_BUDGET).contains(&r.budget_allocated))
        .count();
    record(
        &mut violations,
        QualityRule::AllocatedBudgetInRange {
            min: MIN_ALLOCATED_BUDGET,
            max: MAX_ALLOCATED_BUDGET,
        },
        allocated_out,
    );

    let spent_out = records
        .iter()
        .filter(|r| !(0.0..=MAX_SPENT_BUDGET).contains(&r.budget_spent))
        .count();
    record(
        &mut violations,
        QualityRule::SpentBudgetInRange {
            min: 0.0,
            max: MAX_SPENT_BUDGET,
        },
        spent_out,
    );

    let overruns = records
        .iter()
        .filter(|r| r.budget_spent > r.budget_allocated * SPENT_OVERRUN_TOLERANCE)
        .count();
    record(
        &mut violations,
        QualityRule::SpentWithinOverrunTolerance {
            tolerance: SPENT_OVERRUN_TOLERANCE,
        },
        overruns,
    );

    let inverted = records
        .iter()
        .filter(|r| r.start_date > r.target_end_date)
        .count();
    record(&mut violations, QualityRule::StartBeforeTargetEnd, inverted);

    QualityReport::new(INITIATIVES_DATASET, checked_at, records.len(), violations)
}

/// Validate the financial series. Missing optional values never count as
/// violations; only present values are range-checked.
pub fn validate_financial_metrics(
    records: &[FinancialMetric],
    checked_at: DateTime<Utc>,
) -> QualityReport {
    let mut violations = Vec::new();
    let earliest = earliest_metric_date();

    let roi_out = records
        .iter()
        .filter(|r| {
            r.roi_percentage
                .is_some_and(|v| !(MIN_ROI_PERCENTAGE..=MAX_ROI_PERCENTAGE).contains(&v))
        })
        .count();
    record(
        &mut violations,
        QualityRule::RoiInRange {
            min: MIN_ROI_PERCENTAGE,
            max: MAX_ROI_PERCENTAGE,
        },
        roi_out,
    );

    let revenue_out = records
        .iter()
        .filter(|r| {
            r.revenue_impact
                .is_some_and(|v| !(0.0..=MAX_REVENUE_IMPACT).contains(&v))
        })
        .count();
    record(
        &mut violations,
        QualityRule::RevenueImpactInRange {
            min: 0.0,
            max: MAX_REVENUE_IMPACT,
        },
        revenue_out,
    );

    let reduction_out = records
        .iter()
        .filter(|r| {
            r.cost_reduction
                .is_some_and(|v| !(0.0..=MAX_COST_REDUCTION).contains(&v))
        })
        .count();
    record(
        &mut violations,
        QualityRule::CostReductionInRange {
            min: 0.0,
            max: MAX_COST_REDUCTION,
        },
        reduction_out,
    );

    let negative_burn = records
        .iter()
        .filter(|r| r.budget_burn_rate.is_some_and(|v| v < 0.0))
        .count();
    record(&mut violations, QualityRule::NonNegativeBurnRate, negative_burn);

    let stale = records.iter().filter(|r| r.date < earliest).count();
    record(
        &mut violations,
        QualityRule::DateNotBefore { earliest },
        stale,
    );

    QualityReport::new(FINANCIAL_DATASET, checked_at, records.len(), violations)
}

/// Validate the operational series. Both satisfaction columns share the
/// 0–10 scale rule.
pub fn validate_operational_metrics(
    records: &[OperationalMetric],
    checked_at: DateTime<Utc>,
) -> QualityReport {
    let mut violations = Vec::new();

    let efficiency_out = records
        .iter()
        .filter(|r| {
            r.efficiency_gain_percentage
                .is_some_and(|v| !(0.0..=MAX_EFFICIENCY_GAIN).contains(&v))
        })
        .count();
    record(
        &mut violations,
        QualityRule::EfficiencyGainInRange {
            min: 0.0,
            max: MAX_EFFICIENCY_GAIN,
        },
        efficiency_out,
    );

    let quality_out = records
        .iter()
        .filter(|r| {
            r.quality_score
                .is_some_and(|v| !(0.0..=MAX_QUALITY_SCORE).contains(&v))
        })
        .count();
    record(
        &mut violations,
        QualityRule::QualityScoreInRange {
            min: 0.0,
            max: MAX_QUALITY_SCORE,
        },
        quality_out,
    );

    let satisfaction_out = records
        .iter()
        .filter(|r| {
            let out = |v: f64| !(0.0..=MAX_SATISFACTION).contains(&v);
            r.employee_satisfaction.is_some_and(out) || r.customer_satisfaction.is_some_and(out)
        })
        .count();
    record(
        &mut violations,
        QualityRule::SatisfactionInRange {
            min: 0.0,
            max: MAX_SATISFACTION,
        },
        satisfaction_out,
    );

    QualityReport::new(OPERATIONAL_DATASET, checked_at, records.len(), violations)
}
