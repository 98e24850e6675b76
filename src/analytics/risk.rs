//! Risk tagging and completion-date prediction

use chrono::{DateTime, Duration, Utc};

use crate::models::health::RiskFactor;
use crate::models::initiative::InitiativeStatus;

pub const OVERRUN_UTILIZATION: f64 = 1.1;
pub const LOW_ROI_THRESHOLD: f64 = 5.0;
pub const LOW_SATISFACTION_THRESHOLD: f64 = 6.0;

/// Satisfaction assumed when no samples exist. Sits above the flag
/// threshold, so missing data never raises the flag on its own.
pub const RISK_DEFAULT_SATISFACTION: f64 = 8.0;

/// Progress floor for the extrapolation divisor; keeps a fresh initiative
/// from projecting an absurdly distant finish.
const MIN_PROGRESS_FOR_PREDICTION: f64 = 0.1;

/// Extrapolate a completion date from observed progress.
///
/// Completed initiatives keep their target date untouched. An initiative
/// that has not started yet (progress ≤ 0) falls back to the target date.
pub fn predicted_completion_date(
    status: InitiativeStatus,
    start: DateTime<Utc>,
    target_end: DateTime<Utc>,
    days_since_start: i64,
    time_progress: f64,
) -> DateTime<Utc> {
    if status == InitiativeStatus::Completed {
        return target_end;
    }

    if time_progress > 0.0 {
        let estimated_total_days =
            days_since_start as f64 / time_progress.max(MIN_PROGRESS_FOR_PREDICTION);
        // Fractional days survive the extrapolation.
        start + Duration::seconds((estimated_total_days * 86_400.0) as i64)
    } else {
        target_end
    }
}

/// Independent risk checks, evaluated in a fixed order. An initiative can
/// carry zero to four tags.
///
/// Missing ROI counts as 0 and therefore flags; missing satisfaction counts
/// as 8 and therefore does not.
pub fn identify_risk_factors(
    budget_utilization: f64,
    time_progress: f64,
    status: InitiativeStatus,
    roi_percentage: Option<f64>,
    employee_satisfaction: Option<f64>,
) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if budget_utilization > OVERRUN_UTILIZATION {
        risks.push(RiskFactor::BudgetOverrun);
    }

    if time_progress > 1.0 && status != InitiativeStatus::Completed {
        risks.push(RiskFactor::ScheduleDelay);
    }

    if roi_percentage.unwrap_or(0.0) < LOW_ROI_THRESHOLD {
        risks.push(RiskFactor::LowRoi);
    }

    if employee_satisfaction.unwrap_or(RISK_DEFAULT_SATISFACTION) < LOW_SATISFACTION_THRESHOLD {
        risks.push(RiskFactor::TeamSatisfaction);
    }

    risks
}
