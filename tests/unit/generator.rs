//! Unit tests for the mock dataset generator

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use portopulse::generator::{
    generate_financial_metrics, generate_initiatives, generate_operational_metrics,
    DEFAULT_INITIATIVE_COUNT, INITIATIVE_NAMES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_generates_requested_count_with_unique_uuid_ids() {
    let initiatives = generate_initiatives(DEFAULT_INITIATIVE_COUNT, &mut rng(), fixed_now());

    assert_eq!(initiatives.len(), 12);
    let ids: HashSet<&str> = initiatives.iter().map(|i| i.initiative_id.as_str()).collect();
    assert_eq!(ids.len(), 12);
    for id in ids {
        assert!(Uuid::parse_str(id).is_ok(), "id {} is not a uuid", id);
    }
}

#[test]
fn test_initiative_dates_and_budgets_stay_in_range() {
    let now = fixed_now();
    let initiatives = generate_initiatives(50, &mut rng(), now);

    for initiative in &initiatives {
        assert_eq!(initiative.start_date.time(), NaiveTime::MIN);
        assert!(initiative.start_date >= now - Duration::days(180) - Duration::hours(12));
        assert!(initiative.start_date <= now - Duration::days(30));

        let duration = (initiative.target_end_date - initiative.start_date).num_days();
        assert!((90..=365).contains(&duration), "duration {} days", duration);

        assert!((100_000.0..2_000_000.0).contains(&initiative.budget_allocated));
        assert!((50_000.0..1_800_000.0).contains(&initiative.budget_spent));
    }
}

#[test]
fn test_names_cycle_when_count_exceeds_pool() {
    let initiatives = generate_initiatives(14, &mut rng(), fixed_now());

    assert_eq!(initiatives[0].name, INITIATIVE_NAMES[0]);
    assert_eq!(initiatives[11].name, INITIATIVE_NAMES[11]);
    assert_eq!(initiatives[12].name, INITIATIVE_NAMES[0]);
    assert_eq!(initiatives[13].name, INITIATIVE_NAMES[1]);
}

#[test]
fn test_financial_series_covers_every_initiative_and_day() {
    let now = fixed_now();
    let mut rng = rng();
    let initiatives = generate_initiatives(3, &mut rng, now);
    let metrics = generate_financial_metrics(&initiatives, 7, &mut rng, now);

    assert_eq!(metrics.len(), 21);
    for (chunk, initiative) in metrics.chunks(7).zip(&initiatives) {
        for (offset, metric) in chunk.iter().enumerate() {
            assert_eq!(metric.initiative_id, initiative.initiative_id);
            assert_eq!(metric.date, now - Duration::days(offset as i64));
        }
    }
}

#[test]
fn test_financial_values_present_and_in_range() {
    let now = fixed_now();
    let mut rng = rng();
    let initiatives = generate_initiatives(4, &mut rng, now);
    let metrics = generate_financial_metrics(&initiatives, 30, &mut rng, now);

    for (chunk, initiative) in metrics.chunks(30).zip(&initiatives) {
        for metric in chunk {
            let revenue = metric.revenue_impact.unwrap();
            assert!((8_000.0..120_000.0).contains(&revenue), "revenue {}", revenue);

            let reduction = metric.cost_reduction.unwrap();
            assert!((3_500.0..65_000.0).contains(&reduction));

            assert!((-10.0..35.0).contains(&metric.roi_percentage.unwrap()));
            assert!((0.5..3.0).contains(&metric.budget_burn_rate.unwrap()));

            let forecast = metric.forecast_completion_cost.unwrap();
            assert!(forecast >= initiative.budget_allocated * 0.9);
            assert!(forecast < initiative.budget_allocated * 1.15);
        }
    }
}

#[test]
fn test_operational_series_covers_every_initiative_and_day() {
    let now = fixed_now();
    let mut rng = rng();
    let initiatives = generate_initiatives(2, &mut rng, now);
    let metrics = generate_operational_metrics(&initiatives, 5, &mut rng, now);

    assert_eq!(metrics.len(), 10);
    for (chunk, initiative) in metrics.chunks(5).zip(&initiatives) {
        assert_eq!(chunk[0].date, now);
        for metric in chunk {
            assert_eq!(metric.initiative_id, initiative.initiative_id);
        }
    }
}

#[test]
fn test_operational_values_present_and_in_range() {
    let now = fixed_now();
    let mut rng = rng();
    let initiatives = generate_initiatives(4, &mut rng, now);
    let metrics = generate_operational_metrics(&initiatives, 30, &mut rng, now);

    for metric in &metrics {
        assert!((0.0..25.0).contains(&metric.efficiency_gain_percentage.unwrap()));
        assert!((1.0..48.0).contains(&metric.process_cycle_time.unwrap()));
        assert!((70.0..98.0).contains(&metric.quality_score.unwrap()));
        assert!((6.0..9.0).contains(&metric.employee_satisfaction.unwrap()));
        assert!((7.0..9.5).contains(&metric.customer_satisfaction.unwrap()));
    }
}

#[test]
fn test_default_count_uses_each_name_once() {
    let initiatives = generate_initiatives(DEFAULT_INITIATIVE_COUNT, &mut rng(), fixed_now());
    let names: HashSet<&str> = initiatives.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names.len(), INITIATIVE_NAMES.len());
}
