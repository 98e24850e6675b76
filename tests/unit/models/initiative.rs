//! Unit tests for the source dataset models

use chrono::{TimeZone, Utc};
use portopulse::models::{FinancialMetric, Initiative, InitiativeStatus, InitiativeType};

#[test]
fn test_status_serializes_with_spaces() {
    assert_eq!(
        serde_json::to_string(&InitiativeStatus::InProgress).unwrap(),
        "\"In Progress\""
    );
    assert_eq!(
        serde_json::to_string(&InitiativeStatus::AtRisk).unwrap(),
        "\"At Risk\""
    );
    assert_eq!(
        serde_json::to_string(&InitiativeStatus::OnHold).unwrap(),
        "\"On Hold\""
    );
}

#[test]
fn test_status_round_trips() {
    for status in InitiativeStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        let back: InitiativeStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn test_type_uses_hr_abbreviation() {
    assert_eq!(
        serde_json::to_string(&InitiativeType::Hr).unwrap(),
        "\"HR\""
    );
    let back: InitiativeType = serde_json::from_str("\"HR\"").unwrap();
    assert_eq!(back, InitiativeType::Hr);
}

#[test]
fn test_active_statuses_include_at_risk() {
    assert!(InitiativeStatus::InProgress.is_active());
    assert!(InitiativeStatus::AtRisk.is_active());
    assert!(!InitiativeStatus::Planning.is_active());
    assert!(!InitiativeStatus::Completed.is_active());
    assert!(!InitiativeStatus::OnHold.is_active());
}

#[test]
fn test_initiative_type_field_renames_to_type() {
    let initiative = Initiative {
        initiative_id: "init-1".to_string(),
        name: "ERP System Upgrade".to_string(),
        initiative_type: InitiativeType::Digital,
        start_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        target_end_date: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        budget_allocated: 500_000.0,
        budget_spent: 250_000.0,
        status: InitiativeStatus::InProgress,
        owner: "Marcus Webb".to_string(),
        description: "Staged rollout".to_string(),
    };

    let value = serde_json::to_value(&initiative).unwrap();
    assert_eq!(value["type"], "Digital");
    assert!(value.get("initiative_type").is_none());
}

#[test]
fn test_metric_builder_leaves_unset_fields_absent() {
    let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let metric = FinancialMetric::new("init-1", date).with_roi_percentage(12.5);

    assert_eq!(metric.roi_percentage, Some(12.5));
    assert_eq!(metric.revenue_impact, None);
    assert_eq!(metric.budget_burn_rate, None);
}

#[test]
fn test_metric_deserializes_with_missing_columns() {
    // A source that drops optional columns must still decode.
    let json = r#"{"initiative_id": "init-1", "date": "2025-06-01T00:00:00Z"}"#;
    let metric: FinancialMetric = serde_json::from_str(json).unwrap();
    assert_eq!(metric.initiative_id, "init-1");
    assert_eq!(metric.revenue_impact, None);
    assert_eq!(metric.roi_percentage, None);
}
