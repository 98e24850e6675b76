//! Financial sub-score: banded mean ROI plus series aggregation

use std::collections::HashMap;

use crate::models::health::FinancialAggregate;
use crate::models::initiative::FinancialMetric;

pub const MAX_FINANCIAL_SCORE: f64 = 30.0;

/// ROI assumed for an initiative with no financial samples. Scored as a real
/// zero, not treated as missing.
pub const DEFAULT_ROI: f64 = 0.0;

#[derive(Default)]
struct SeriesAcc {
    revenue_sum: f64,
    reduction_sum: f64,
    roi_sum: f64,
    roi_count: usize,
}

/// Group the daily financial series by initiative: sums for revenue impact
/// and cost reduction, mean for ROI. Absent values are skipped, never
/// counted as zero observations.
pub fn aggregate_by_initiative(samples: &[FinancialMetric]) -> HashMap<String, FinancialAggregate> {
    let mut acc: HashMap<String, SeriesAcc> = HashMap::new();

    for sample in samples {
        let entry = acc.entry(sample.initiative_id.clone()).or_default();
        if let Some(revenue) = sample.revenue_impact {
            entry.revenue_sum += revenue;
        }
        if let Some(reduction) = sample.cost_reduction {
            entry.reduction_sum += reduction;
        }
        if let Some(roi) = sample.roi_percentage {
            entry.roi_sum += roi;
            entry.roi_count += 1;
        }
    }

    acc.into_iter()
        .map(|(id, series)| {
            let roi_percentage =
                (series.roi_count > 0).then(|| series.roi_sum / series.roi_count as f64);
            (
                id,
                FinancialAggregate {
                    revenue_impact: series.revenue_sum,
                    cost_reduction: series.reduction_sum,
                    roi_percentage,
                },
            )
        })
        .collect()
}

/// Banded score over mean ROI:
/// ≥ 20 → 30, ≥ 15 → 25, ≥ 10 → 20, ≥ 5 → 15, ≥ 0 → 10, negative → 0
pub fn financial_score(roi: f64) -> f64 {
    if roi >= 20.0 {
        30.0
    } else if roi >= 15.0 {
        25.0
    } else if roi >= 10.0 {
        20.0
    } else if roi >= 5.0 {
        15.0
    } else if roi >= 0.0 {
        10.0
    } else {
        0.0
    }
}
