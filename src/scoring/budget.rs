//! Budget sub-score: piecewise bands over budget utilization

pub const MAX_BUDGET_SCORE: f64 = 25.0;

/// Ratio of spent to allocated budget.
///
/// An allocation at or below zero yields +infinity so the band checks land
/// in the zero-point band instead of propagating NaN downstream.
pub fn budget_utilization(spent: f64, allocated: f64) -> f64 {
    if allocated <= 0.0 {
        return f64::INFINITY;
    }
    spent / allocated
}

/// Piecewise budget score over utilization:
/// [0.8, 1.0] → 25, [0.6, 0.8) or (1.0, 1.1] → 20,
/// [0.4, 0.6) or (1.1, 1.2] → 10, otherwise 0
pub fn budget_score(utilization: f64) -> f64 {
    if (0.8..=1.0).contains(&utilization) {
        25.0
    } else if (0.6..0.8).contains(&utilization) || (utilization > 1.0 && utilization <= 1.1) {
        20.0
    } else if (0.4..0.6).contains(&utilization) || (utilization > 1.1 && utilization <= 1.2) {
        10.0
    } else {
        0.0
    }
}
