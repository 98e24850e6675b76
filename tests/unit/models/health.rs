//! Unit tests for health classification and risk tags

use portopulse::models::{HealthStatus, RiskFactor, AT_RISK_THRESHOLD};

#[test]
fn test_classification_bands() {
    assert_eq!(HealthStatus::from_score(100.0), HealthStatus::Excellent);
    assert_eq!(HealthStatus::from_score(80.0), HealthStatus::Excellent);
    assert_eq!(HealthStatus::from_score(79.9), HealthStatus::Good);
    assert_eq!(HealthStatus::from_score(65.0), HealthStatus::Good);
    assert_eq!(HealthStatus::from_score(64.9), HealthStatus::Warning);
    assert_eq!(HealthStatus::from_score(50.0), HealthStatus::Warning);
    assert_eq!(HealthStatus::from_score(49.9), HealthStatus::Critical);
    assert_eq!(HealthStatus::from_score(0.0), HealthStatus::Critical);
}

#[test]
fn test_critical_band_starts_at_the_at_risk_threshold() {
    assert_eq!(AT_RISK_THRESHOLD, 50.0);
    assert_eq!(
        HealthStatus::from_score(AT_RISK_THRESHOLD),
        HealthStatus::Warning
    );
    assert_eq!(
        HealthStatus::from_score(AT_RISK_THRESHOLD - 0.1),
        HealthStatus::Critical
    );
}

#[test]
fn test_status_display() {
    assert_eq!(HealthStatus::Excellent.to_string(), "Excellent");
    assert_eq!(HealthStatus::Critical.as_str(), "Critical");
}

#[test]
fn test_risk_factors_serialize_as_labels() {
    assert_eq!(
        serde_json::to_string(&RiskFactor::BudgetOverrun).unwrap(),
        "\"Budget Overrun\""
    );
    assert_eq!(
        serde_json::to_string(&RiskFactor::ScheduleDelay).unwrap(),
        "\"Schedule Delay\""
    );
    assert_eq!(
        serde_json::to_string(&RiskFactor::LowRoi).unwrap(),
        "\"Low ROI\""
    );
    assert_eq!(
        serde_json::to_string(&RiskFactor::TeamSatisfaction).unwrap(),
        "\"Team Satisfaction\""
    );
}
