//! Operational sub-score: weighted composite of efficiency, quality, satisfaction

use std::collections::HashMap;

use crate::models::health::OperationalAggregate;
use crate::models::initiative::OperationalMetric;

pub const MAX_OPERATIONAL_SCORE: f64 = 20.0;

/// Neutral defaults for an initiative with no operational samples.
pub const DEFAULT_EFFICIENCY_GAIN: f64 = 0.0;
pub const DEFAULT_QUALITY_SCORE: f64 = 80.0;
pub const DEFAULT_EMPLOYEE_SATISFACTION: f64 = 7.0;

#[derive(Default)]
struct FieldMean {
    sum: f64,
    count: usize,
}

impl FieldMean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Group the daily operational series by initiative, taking the mean of each
/// field over the samples that carry it.
pub fn aggregate_by_initiative(
    samples: &[OperationalMetric],
) -> HashMap<String, OperationalAggregate> {
    let mut acc: HashMap<String, (FieldMean, FieldMean, FieldMean)> = HashMap::new();

    for sample in samples {
        let entry = acc.entry(sample.initiative_id.clone()).or_default();
        entry.0.add(sample.efficiency_gain_percentage);
        entry.1.add(sample.quality_score);
        entry.2.add(sample.employee_satisfaction);
    }

    acc.into_iter()
        .map(|(id, (efficiency, quality, satisfaction))| {
            (
                id,
                OperationalAggregate {
                    efficiency_gain: efficiency.mean(),
                    quality_score: quality.mean(),
                    employee_satisfaction: satisfaction.mean(),
                },
            )
        })
        .collect()
}

/// Composite 0.4×efficiency + 0.2×quality + 2×satisfaction with neutral
/// defaults for missing aggregates, clamped to [0, 20].
pub fn operational_score(aggregate: &OperationalAggregate) -> f64 {
    let efficiency = aggregate.efficiency_gain.unwrap_or(DEFAULT_EFFICIENCY_GAIN);
    let quality = aggregate.quality_score.unwrap_or(DEFAULT_QUALITY_SCORE);
    let satisfaction = aggregate
        .employee_satisfaction
        .unwrap_or(DEFAULT_EMPLOYEE_SATISFACTION);

    (0.4 * efficiency + 0.2 * quality + 2.0 * satisfaction).clamp(0.0, MAX_OPERATIONAL_SCORE)
}
