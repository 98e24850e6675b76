//! Executive summary: a fixed digest of four portfolio KPIs.

use crate::models::portfolio::{ExecutiveSummaryRow, KpiStatus, PortfolioMetrics};

pub const ROI_GOOD_THRESHOLD: f64 = 15.0;
pub const BUDGET_GOOD_MIN: f64 = 80.0;
pub const BUDGET_GOOD_MAX: f64 = 100.0;
pub const AT_RISK_CRITICAL_SHARE: f64 = 0.3;
pub const COMPLETION_GOOD_THRESHOLD: f64 = 60.0;

/// Build the four-row digest, always in the same order: ROI, budget
/// utilization, at-risk count, completion rate.
pub fn executive_summary(metrics: &PortfolioMetrics) -> Vec<ExecutiveSummaryRow> {
    vec![
        roi_row(metrics),
        budget_row(metrics),
        at_risk_row(metrics),
        completion_row(metrics),
    ]
}

/// Share of initiatives that reached Completed, as a percentage.
pub fn completion_rate(metrics: &PortfolioMetrics) -> f64 {
    if metrics.total_initiatives > 0 {
        metrics.completed_initiatives as f64 / metrics.total_initiatives as f64 * 100.0
    } else {
        0.0
    }
}

fn roi_row(metrics: &PortfolioMetrics) -> ExecutiveSummaryRow {
    let roi = metrics.portfolio_roi;
    let good = roi > ROI_GOOD_THRESHOLD;
    ExecutiveSummaryRow {
        metric_name: "Portfolio ROI".to_string(),
        current_value: format!("{roi:.1}%"),
        status: if good {
            KpiStatus::Good
        } else {
            KpiStatus::Warning
        },
        description: "Return on Investment across all transformation initiatives".to_string(),
        action_required: if good {
            "None".to_string()
        } else {
            "Review underperforming initiatives".to_string()
        },
    }
}

fn budget_row(metrics: &PortfolioMetrics) -> ExecutiveSummaryRow {
    let rate = metrics.budget_utilization_rate;
    let on_track = (BUDGET_GOOD_MIN..=BUDGET_GOOD_MAX).contains(&rate);
    ExecutiveSummaryRow {
        metric_name: "Budget Utilization".to_string(),
        current_value: format!("{rate:.1}%"),
        status: if on_track {
            KpiStatus::Good
        } else {
            KpiStatus::Warning
        },
        description: "Overall budget utilization across portfolio".to_string(),
        action_required: if on_track {
            "None".to_string()
        } else {
            "Budget reallocation needed".to_string()
        },
    }
}

fn at_risk_row(metrics: &PortfolioMetrics) -> ExecutiveSummaryRow {
    let count = metrics.at_risk_initiatives.count;
    let total = metrics.total_initiatives;
    // Status tracks the at-risk share while the action tracks the bare
    // count, so a small-but-nonzero count reads Good with an action.
    let critical = count as f64 > total as f64 * AT_RISK_CRITICAL_SHARE;
    ExecutiveSummaryRow {
        metric_name: "At-Risk Initiatives".to_string(),
        current_value: format!("{count}/{total}"),
        status: if critical {
            KpiStatus::Critical
        } else {
            KpiStatus::Good
        },
        description: "Number of initiatives requiring immediate attention".to_string(),
        action_required: if count > 0 {
            "Immediate intervention required".to_string()
        } else {
            "None".to_string()
        },
    }
}

fn completion_row(metrics: &PortfolioMetrics) -> ExecutiveSummaryRow {
    let rate = completion_rate(metrics);
    ExecutiveSummaryRow {
        metric_name: "Completion Rate".to_string(),
        current_value: format!("{rate:.1}%"),
        status: if rate > COMPLETION_GOOD_THRESHOLD {
            KpiStatus::Good
        } else {
            KpiStatus::Warning
        },
        description: "Percentage of initiatives successfully completed".to_string(),
        action_required: if rate < COMPLETION_GOOD_THRESHOLD {
            "Accelerate delivery".to_string()
        } else {
            "None".to_string()
        },
    }
}
