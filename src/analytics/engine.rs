//! Health scoring engine: joins the three datasets into scored rows.

use chrono::{DateTime, Utc};

use crate::analytics::risk;
use crate::models::health::{FinancialAggregate, HealthStatus, InitiativeHealth, OperationalAggregate};
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};
use crate::scoring;

pub struct HealthEngine;

impl HealthEngine {
    /// Score every initiative against one snapshot of the metric series.
    ///
    /// Left-join semantics: output order follows input order, and an
    /// initiative with no matching samples still appears, scored on the
    /// neutral defaults.
    pub fn score_initiatives(
        initiatives: &[Initiative],
        financial: &[FinancialMetric],
        operational: &[OperationalMetric],
        now: DateTime<Utc>,
    ) -> Vec<InitiativeHealth> {
        let financial_aggs = scoring::financial::aggregate_by_initiative(financial);
        let operational_aggs = scoring::operational::aggregate_by_initiative(operational);

        initiatives
            .iter()
            .map(|initiative| {
                let financial_agg = financial_aggs
                    .get(&initiative.initiative_id)
                    .copied()
                    .unwrap_or_default();
                let operational_agg = operational_aggs
                    .get(&initiative.initiative_id)
                    .copied()
                    .unwrap_or_default();
                Self::score_one(initiative, financial_agg, operational_agg, now)
            })
            .collect()
    }

    fn score_one(
        initiative: &Initiative,
        financial: FinancialAggregate,
        operational: OperationalAggregate,
        now: DateTime<Utc>,
    ) -> InitiativeHealth {
        let budget_utilization =
            scoring::budget_utilization(initiative.budget_spent, initiative.budget_allocated);
        let budget_score = scoring::budget_score(budget_utilization);

        let days_since_start = scoring::days_since_start(initiative.start_date, now);
        let total_duration =
            scoring::planned_duration(initiative.start_date, initiative.target_end_date);
        let time_progress = scoring::time_progress(days_since_start, total_duration);
        let time_score = scoring::time_score(initiative.status, time_progress);

        let financial_score =
            scoring::financial_score(financial.roi_percentage.unwrap_or(scoring::DEFAULT_ROI));
        let operational_score = scoring::operational_score(&operational);

        // Each sub-score is clamped to its band, so the sum stays in [0, 100].
        let health_score = budget_score + time_score + financial_score + operational_score;
        let health_status = HealthStatus::from_score(health_score);

        let predicted_completion_date = risk::predicted_completion_date(
            initiative.status,
            initiative.start_date,
            initiative.target_end_date,
            days_since_start,
            time_progress,
        );
        let risk_factors = risk::identify_risk_factors(
            budget_utilization,
            time_progress,
            initiative.status,
            financial.roi_percentage,
            operational.employee_satisfaction,
        );

        InitiativeHealth {
            initiative: initiative.clone(),
            budget_utilization,
            budget_score,
            days_since_start,
            total_duration,
            time_progress,
            time_score,
            revenue_impact: financial.revenue_impact,
            cost_reduction: financial.cost_reduction,
            roi_percentage: financial.roi_percentage,
            financial_score,
            efficiency_gain_percentage: operational.efficiency_gain,
            quality_score: operational.quality_score,
            employee_satisfaction: operational.employee_satisfaction,
            operational_score,
            health_score,
            health_status,
            predicted_completion_date,
            risk_factors,
        }
    }
}
