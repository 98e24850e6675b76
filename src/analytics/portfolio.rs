//! Portfolio-level rollups over scored rows and the raw financial series.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::health::{HealthStatus, InitiativeHealth};
use crate::models::initiative::{FinancialMetric, InitiativeStatus, InitiativeType};
use crate::models::portfolio::{
    AtRiskSummary, HealthDistribution, PortfolioMetrics, TypePerformance, UpcomingCompletions,
};

/// Predictions landing inside this many days of `now` count as upcoming.
/// Past-due predictions land inside the window too.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Roll scored rows and the raw financial series up into portfolio KPIs.
///
/// Revenue and cost totals come from the raw series — every present sample
/// across all initiatives and dates — not from the per-initiative
/// aggregates. Zero denominators yield the 0.0 sentinel, never NaN.
pub fn portfolio_metrics(
    health: &[InitiativeHealth],
    financial: &[FinancialMetric],
    now: DateTime<Utc>,
) -> PortfolioMetrics {
    let total_initiatives = health.len();
    let active_initiatives = health
        .iter()
        .filter(|row| row.initiative.status.is_active())
        .count();
    let completed_initiatives = health
        .iter()
        .filter(|row| row.initiative.status == InitiativeStatus::Completed)
        .count();

    let total_budget_allocated: f64 = health
        .iter()
        .map(|row| row.initiative.budget_allocated)
        .sum();
    let total_budget_spent: f64 = health.iter().map(|row| row.initiative.budget_spent).sum();
    let budget_utilization_rate = if total_budget_allocated > 0.0 {
        total_budget_spent / total_budget_allocated * 100.0
    } else {
        0.0
    };

    let total_revenue_impact: f64 = financial.iter().filter_map(|s| s.revenue_impact).sum();
    let total_cost_reduction: f64 = financial.iter().filter_map(|s| s.cost_reduction).sum();
    let total_financial_impact = total_revenue_impact + total_cost_reduction;
    let portfolio_roi = if total_budget_spent > 0.0 {
        (total_financial_impact / total_budget_spent - 1.0) * 100.0
    } else {
        0.0
    };

    let mut health_distribution = HealthDistribution::default();
    for row in health {
        match row.health_status {
            HealthStatus::Excellent => health_distribution.excellent += 1,
            HealthStatus::Good => health_distribution.good += 1,
            HealthStatus::Warning => health_distribution.warning += 1,
            HealthStatus::Critical => health_distribution.critical += 1,
        }
    }

    let at_risk: Vec<&InitiativeHealth> = health.iter().filter(|row| row.is_at_risk()).collect();
    let at_risk_initiatives = AtRiskSummary {
        count: at_risk.len(),
        total_budget: at_risk
            .iter()
            .map(|row| row.initiative.budget_allocated)
            .sum(),
        names: at_risk
            .iter()
            .map(|row| row.initiative.name.clone())
            .collect(),
    };

    let window_end = now + Duration::days(UPCOMING_WINDOW_DAYS);
    let upcoming: Vec<&InitiativeHealth> = health
        .iter()
        .filter(|row| row.predicted_completion_date <= window_end)
        .collect();
    let upcoming_completions = UpcomingCompletions {
        count: upcoming.len(),
        names: upcoming
            .iter()
            .map(|row| row.initiative.name.clone())
            .collect(),
    };

    PortfolioMetrics {
        computed_at: now,
        total_initiatives,
        active_initiatives,
        completed_initiatives,
        total_budget_allocated,
        total_budget_spent,
        budget_utilization_rate,
        total_financial_impact,
        portfolio_roi,
        health_distribution,
        at_risk_initiatives,
        performance_by_type: aggregate_by_type(health),
        upcoming_completions,
    }
}

#[derive(Default)]
struct TypeAcc {
    health_sum: f64,
    count: usize,
    budget_sum: f64,
    roi_sum: f64,
    roi_count: usize,
}

/// Per-category mean health score, summed budget, and mean per-initiative
/// ROI. Initiatives without a ROI aggregate are skipped from the ROI mean;
/// a category with none at all reports null. Values round to 2 decimals.
fn aggregate_by_type(health: &[InitiativeHealth]) -> BTreeMap<InitiativeType, TypePerformance> {
    let mut acc: BTreeMap<InitiativeType, TypeAcc> = BTreeMap::new();

    for row in health {
        let entry = acc.entry(row.initiative.initiative_type).or_default();
        entry.health_sum += row.health_score;
        entry.count += 1;
        entry.budget_sum += row.initiative.budget_allocated;
        if let Some(roi) = row.roi_percentage {
            entry.roi_sum += roi;
            entry.roi_count += 1;
        }
    }

    acc.into_iter()
        .map(|(initiative_type, acc)| {
            (
                initiative_type,
                TypePerformance {
                    health_score: round2(acc.health_sum / acc.count as f64),
                    budget_allocated: round2(acc.budget_sum),
                    roi_percentage: (acc.roi_count > 0)
                        .then(|| round2(acc.roi_sum / acc.roi_count as f64)),
                },
            )
        })
        .collect()
}
