//! Test utilities for pipeline integration tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use portopulse::models::{
    FinancialMetric, Initiative, InitiativeStatus, InitiativeType, OperationalMetric,
};
use portopulse::store::{
    DatasetSnapshot, DatasetStore, FsStore, FINANCIAL_DATASET, INITIATIVES_DATASET,
    OPERATIONAL_DATASET,
};

pub const TEST_SOURCE: &str = "test-source";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn initiative(
    id: &str,
    name: &str,
    status: InitiativeStatus,
    started_days_ago: i64,
    duration_days: i64,
    allocated: f64,
    spent: f64,
) -> Initiative {
    let start_date = fixed_now() - Duration::days(started_days_ago);
    Initiative {
        initiative_id: id.to_string(),
        name: name.to_string(),
        initiative_type: InitiativeType::Digital,
        start_date,
        target_end_date: start_date + Duration::days(duration_days),
        budget_allocated: allocated,
        budget_spent: spent,
        status,
        owner: "Priya Raghavan".to_string(),
        description: "Fixture initiative".to_string(),
    }
}

/// Two-initiative portfolio: "alpha" lands a perfect score, "beta" trips
/// every risk check.
pub fn portfolio_initiatives() -> Vec<Initiative> {
    vec![
        initiative(
            "alpha",
            "Digital Customer Portal",
            InitiativeStatus::Completed,
            100,
            90,
            100_000.0,
            85_000.0,
        ),
        initiative(
            "beta",
            "ERP System Upgrade",
            InitiativeStatus::InProgress,
            150,
            50,
            100_000.0,
            130_000.0,
        ),
    ]
}

pub fn financial_fixture() -> Vec<FinancialMetric> {
    vec![
        FinancialMetric::new("alpha", fixed_now())
            .with_revenue_impact(40_000.0)
            .with_cost_reduction(10_000.0)
            .with_roi_percentage(22.0),
        FinancialMetric::new("beta", fixed_now())
            .with_revenue_impact(5_000.0)
            .with_cost_reduction(1_000.0)
            .with_roi_percentage(-5.0),
    ]
}

pub fn operational_fixture() -> Vec<OperationalMetric> {
    vec![
        OperationalMetric::new("alpha", fixed_now())
            .with_efficiency_gain(10.0)
            .with_quality_score(90.0)
            .with_employee_satisfaction(8.0),
        OperationalMetric::new("beta", fixed_now())
            .with_efficiency_gain(2.0)
            .with_quality_score(60.0)
            .with_employee_satisfaction(5.0),
    ]
}

pub async fn seed_snapshots(store: &FsStore, collected_at: DateTime<Utc>) {
    store
        .save_initiatives(&DatasetSnapshot::new(
            INITIATIVES_DATASET,
            TEST_SOURCE,
            collected_at,
            portfolio_initiatives(),
        ))
        .await
        .unwrap();
    store
        .save_financial_metrics(&DatasetSnapshot::new(
            FINANCIAL_DATASET,
            TEST_SOURCE,
            collected_at,
            financial_fixture(),
        ))
        .await
        .unwrap();
    store
        .save_operational_metrics(&DatasetSnapshot::new(
            OPERATIONAL_DATASET,
            TEST_SOURCE,
            collected_at,
            operational_fixture(),
        ))
        .await
        .unwrap();
}
