//! Unit tests for the filesystem snapshot/artifact store

use chrono::{DateTime, Duration, TimeZone, Utc};
use portopulse::error::StoreError;
use portopulse::models::{
    ExecutiveSummaryRow, Initiative, InitiativeStatus, InitiativeType, KpiStatus,
};
use portopulse::quality::validate_initiatives;
use portopulse::store::{ArtifactStore, DatasetSnapshot, DatasetStore, FsStore};
use tempfile::TempDir;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn initiative(id: &str) -> Initiative {
    let start_date = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    Initiative {
        initiative_id: id.to_string(),
        name: "ERP System Upgrade".to_string(),
        initiative_type: InitiativeType::Digital,
        start_date,
        target_end_date: start_date + Duration::days(200),
        budget_allocated: 500_000.0,
        budget_spent: 320_000.0,
        status: InitiativeStatus::InProgress,
        owner: "Marcus Webb".to_string(),
        description: "Fixture".to_string(),
    }
}

fn snapshot(records: Vec<Initiative>, collected_at: DateTime<Utc>) -> DatasetSnapshot<Initiative> {
    DatasetSnapshot::new("initiatives", "test-source", collected_at, records)
}

#[tokio::test]
async fn test_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    let records = vec![initiative("a"), initiative("b")];
    store
        .save_initiatives(&snapshot(records.clone(), fixed_now()))
        .await
        .unwrap();

    let loaded = store.load_initiatives().await.unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&loaded).unwrap(),
        serde_json::to_value(&records).unwrap()
    );
}

#[tokio::test]
async fn test_load_before_any_save_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    assert!(store.load_initiatives().await.unwrap().is_none());
    assert!(store.load_financial_metrics().await.unwrap().is_none());
    assert!(store.load_operational_metrics().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_writes_timestamped_copy_and_latest_pointer() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    store
        .save_initiatives(&snapshot(vec![initiative("a")], fixed_now()))
        .await
        .unwrap();

    let raw = dir.path().join("raw");
    assert!(raw.join("initiatives_20250615_120000.json").exists());
    assert!(raw.join("initiatives_latest.json").exists());
}

#[tokio::test]
async fn test_latest_pointer_tracks_newest_save() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    store
        .save_initiatives(&snapshot(vec![initiative("a")], fixed_now()))
        .await
        .unwrap();
    store
        .save_initiatives(&snapshot(
            vec![initiative("a"), initiative("b")],
            fixed_now() + Duration::minutes(5),
        ))
        .await
        .unwrap();

    let loaded = store.load_initiatives().await.unwrap().unwrap();
    assert_eq!(loaded.len(), 2);

    // Both timestamped copies survive alongside the pointer.
    let raw = dir.path().join("raw");
    assert!(raw.join("initiatives_20250615_120000.json").exists());
    assert!(raw.join("initiatives_20250615_120500.json").exists());
    assert_eq!(std::fs::read_dir(&raw).unwrap().count(), 3);
}

#[tokio::test]
async fn test_undecodable_snapshot_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    let raw = dir.path().join("raw");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(
        raw.join("initiatives_latest.json"),
        r#"{"dataset":"initiatives","collected_at":"2025-06-15T12:00:00Z","source":"test-source","records":[{"bogus":1}]}"#,
    )
    .unwrap();

    let err = store.load_initiatives().await.unwrap_err();
    assert!(
        matches!(err, StoreError::Schema { ref dataset, .. } if dataset == "initiatives"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_artifact_write_returns_timestamped_path() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    let rows = vec![ExecutiveSummaryRow {
        metric_name: "Portfolio ROI".to_string(),
        current_value: "12.5%".to_string(),
        status: KpiStatus::Warning,
        description: "Return on Investment across all transformation initiatives".to_string(),
        action_required: "Review underperforming initiatives".to_string(),
    }];

    let path = store.write_executive_summary(&rows, fixed_now()).await.unwrap();

    let processed = dir.path().join("processed");
    assert_eq!(path, processed.join("executive_summary_20250615_120000.json"));
    assert!(path.exists());

    let latest = processed.join("executive_summary_latest.json");
    let decoded: Vec<ExecutiveSummaryRow> =
        serde_json::from_slice(&std::fs::read(latest).unwrap()).unwrap();
    assert_eq!(decoded, rows);
}

#[tokio::test]
async fn test_quality_reports_are_timestamped_only() {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());

    let report = validate_initiatives(&[initiative("a")], fixed_now());
    let path = store.write_quality_report(&report).unwrap();

    let reports_dir = dir.path().join("quality_reports");
    assert_eq!(
        path,
        reports_dir.join("quality_report_initiatives_20250615_120000.json")
    );
    assert!(path.exists());
    // No latest pointer for advisory reports.
    assert_eq!(std::fs::read_dir(&reports_dir).unwrap().count(), 1);
}
