//! Schedule sub-score: elapsed time against the planned window

use chrono::{DateTime, Utc};

use crate::models::initiative::InitiativeStatus;

pub const MAX_TIME_SCORE: f64 = 25.0;

/// Whole days elapsed between the start date and `now`.
/// Negative when the start lies in the future.
pub fn days_since_start(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_days()
}

/// Whole days in the planned window.
pub fn planned_duration(start: DateTime<Utc>, target_end: DateTime<Utc>) -> i64 {
    (target_end - start).num_days()
}

/// Elapsed share of the planned window.
///
/// A window of zero or negative days counts as already overdue: +infinity,
/// which every band check maps to the zero-point band.
pub fn time_progress(days_since_start: i64, total_duration: i64) -> f64 {
    if total_duration <= 0 {
        return f64::INFINITY;
    }
    days_since_start as f64 / total_duration as f64
}

/// Completed scores the full 25 regardless of progress; otherwise banded:
/// ≤ 0.9 → 20, ≤ 1.0 → 15, ≤ 1.2 → 5, overdue → 0
pub fn time_score(status: InitiativeStatus, time_progress: f64) -> f64 {
    if status == InitiativeStatus::Completed {
        25.0
    } else if time_progress <= 0.9 {
        20.0
    } else if time_progress <= 1.0 {
        15.0
    } else if time_progress <= 1.2 {
        5.0
    } else {
        0.0
    }
}
