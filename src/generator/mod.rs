//! Mock dataset generation backing the source API.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::initiative::{
    FinancialMetric, Initiative, InitiativeStatus, InitiativeType, OperationalMetric,
};

pub const DEFAULT_INITIATIVE_COUNT: usize = 12;

/// Fixed pool of initiative names, cycled when more rows are requested.
pub const INITIATIVE_NAMES: [&str; 12] = [
    "CRM Migration to Salesforce",
    "Supply Chain Automation",
    "Remote Work Infrastructure",
    "Cost Reduction Program",
    "Digital Customer Portal",
    "Lean Manufacturing Implementation",
    "Skills Training Program",
    "ERP System Upgrade",
    "Process Digitization",
    "Vendor Consolidation",
    "Quality Management System",
    "Data Analytics Platform",
];

const OWNERS: [&str; 8] = [
    "Amelia Fontaine",
    "Marcus Webb",
    "Priya Raghavan",
    "Tomasz Kowalski",
    "Ingrid Bergström",
    "Daniel Okafor",
    "Lucía Herrera",
    "Kenji Watanabe",
];

const DESCRIPTIONS: [&str; 6] = [
    "Multi-phase rollout across regional business units with staged cutover.",
    "Executive-sponsored transformation effort tracked at steering committee level.",
    "Cross-functional program pairing process redesign with tooling replacement.",
    "Vendor-supported delivery with internal change-management workstream.",
    "Pilot completed; scaling to remaining sites on the approved roadmap.",
    "Foundational capability build feeding downstream transformation initiatives.",
];

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn midnight(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Generate `count` initiatives with uuid-v4 identifiers.
///
/// Spent budget is drawn independently of allocated, so overruns occur
/// naturally in the mock portfolio.
pub fn generate_initiatives(
    count: usize,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<Initiative> {
    (0..count)
        .map(|i| {
            let start_date = midnight(now - Duration::days(rng.gen_range(30..=180)));
            let duration_days = rng.gen_range(90..=365);
            Initiative {
                initiative_id: Uuid::new_v4().to_string(),
                name: INITIATIVE_NAMES[i % INITIATIVE_NAMES.len()].to_string(),
                initiative_type: InitiativeType::ALL
                    [rng.gen_range(0..InitiativeType::ALL.len())],
                start_date,
                target_end_date: start_date + Duration::days(duration_days),
                budget_allocated: rng.gen_range(100_000.0..2_000_000.0),
                budget_spent: rng.gen_range(50_000.0..1_800_000.0),
                status: InitiativeStatus::ALL[rng.gen_range(0..InitiativeStatus::ALL.len())],
                owner: pick(&OWNERS, rng).to_string(),
                description: pick(&DESCRIPTIONS, rng).to_string(),
            }
        })
        .collect()
}

/// One financial sample per initiative per day, newest first
/// (date = `now` − offset days).
pub fn generate_financial_metrics(
    initiatives: &[Initiative],
    days_back: u32,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<FinancialMetric> {
    let mut metrics = Vec::with_capacity(initiatives.len() * days_back as usize);
    for initiative in initiatives {
        for day_offset in 0..days_back {
            let date = now - Duration::days(i64::from(day_offset));
            let base_revenue: f64 = rng.gen_range(10_000.0..100_000.0);
            let base_cost_reduction: f64 = rng.gen_range(5_000.0..50_000.0);
            metrics.push(
                FinancialMetric::new(initiative.initiative_id.clone(), date)
                    .with_revenue_impact(base_revenue * rng.gen_range(0.8..1.2))
                    .with_cost_reduction(base_cost_reduction * rng.gen_range(0.7..1.3))
                    .with_roi_percentage(rng.gen_range(-10.0..35.0))
                    .with_budget_burn_rate(rng.gen_range(0.5..3.0))
                    .with_forecast_completion_cost(
                        initiative.budget_allocated * rng.gen_range(0.9..1.15),
                    ),
            );
        }
    }
    metrics
}

/// One operational sample per initiative per day, newest first.
pub fn generate_operational_metrics(
    initiatives: &[Initiative],
    days_back: u32,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<OperationalMetric> {
    let mut metrics = Vec::with_capacity(initiatives.len() * days_back as usize);
    for initiative in initiatives {
        for day_offset in 0..days_back {
            let date = now - Duration::days(i64::from(day_offset));
            metrics.push(
                OperationalMetric::new(initiative.initiative_id.clone(), date)
                    .with_efficiency_gain(rng.gen_range(0.0..25.0))
                    .with_process_cycle_time(rng.gen_range(1.0..48.0))
                    .with_quality_score(rng.gen_range(70.0..98.0))
                    .with_employee_satisfaction(rng.gen_range(6.0..9.0))
                    .with_customer_satisfaction(rng.gen_range(7.0..9.5)),
            );
        }
    }
    metrics
}
