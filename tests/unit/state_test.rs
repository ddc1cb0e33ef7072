//! Tests for persisted state access (memory and JSON file stores)

use rategate::PersistedState;
use rategate::adapters::{JsonFileStore, MemoryStore, StoredValue};
use rategate::core::models::{distant_past, keys};
use rategate::{AppVersion, RatingState};
use tempfile::TempDir;

use crate::common::today;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_empty_store_reads_defaults() {
    let state = PersistedState::new(MemoryStore::new());
    assert_eq!(state.last_checked(), distant_past());
    assert_eq!(state.last_tested_version().as_str(), "0.0.0.0");
    assert_eq!(state.points(), 0);
    assert!(!state.remote_should_show());
    assert_eq!(state.snapshot(), RatingState::default());
}

#[test]
fn test_mistyped_values_read_defaults() {
    let store = MemoryStore::new();
    store.insert(keys::ACTUAL_XP_POINTS, StoredValue::String("lots".to_string()));
    store.insert(keys::TESTED_APP_VERSION, StoredValue::Int(3));
    store.insert(keys::LAST_DATE_CHECKED, StoredValue::Bool(true));

    let state = PersistedState::new(store);
    assert_eq!(state.snapshot(), RatingState::default());
}

#[test]
fn test_external_clear_restores_defaults() {
    let state = PersistedState::new(MemoryStore::new());
    state.set_points(40).unwrap();
    state.set_last_checked(today()).unwrap();

    for key in keys::ALL {
        state.store().remove(key);
    }
    assert_eq!(state.snapshot(), RatingState::default());
}

// =============================================================================
// FIELD ACCESS
// =============================================================================

#[test]
fn test_fields_use_legacy_keys() {
    let state = PersistedState::new(MemoryStore::new());
    state.set_last_checked(today()).unwrap();
    state.set_last_tested_version(&AppVersion::from("4.0.0.1")).unwrap();
    state.set_points(12).unwrap();
    state.set_remote_should_show(true).unwrap();

    let store = state.into_inner();
    assert_eq!(store.get("LastDateCheckedKey"), Some(StoredValue::Timestamp(today())));
    assert_eq!(store.get("TestedAppVersionKey"), Some(StoredValue::String("4.0.0.1".to_string())));
    assert_eq!(store.get("ActualXPPointsKey"), Some(StoredValue::Int(12)));
    assert_eq!(store.get("ShouldShowRatingManagerKey"), Some(StoredValue::Bool(true)));
}

#[test]
fn test_huge_points_saturate() {
    let state = PersistedState::new(MemoryStore::new());
    state.set_points(u64::MAX).unwrap();
    assert_eq!(state.points(), u64::try_from(i64::MAX).unwrap());
}

// =============================================================================
// DURABILITY
// =============================================================================

#[test]
fn test_state_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");

    {
        let state = PersistedState::new(JsonFileStore::new(&path));
        state.set_points(77).unwrap();
        state.set_last_tested_version(&AppVersion::from("1.2.0.9")).unwrap();
        state.set_last_checked(today()).unwrap();
        state.set_remote_should_show(true).unwrap();
    }

    let reopened = PersistedState::new(JsonFileStore::new(&path));
    let snapshot = reopened.snapshot();
    assert_eq!(snapshot.points, 77);
    assert_eq!(snapshot.last_tested_version.as_str(), "1.2.0.9");
    assert_eq!(snapshot.last_checked, today());
    assert!(snapshot.remote_should_show);
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    std::fs::write(&path, r#"{ "ActualXPPointsKey": { "type": "int", "value": 30 } }"#).unwrap();

    let state = PersistedState::new(JsonFileStore::new(&path));
    let snapshot = state.snapshot();
    assert_eq!(snapshot.points, 30);
    assert_eq!(snapshot.last_checked, distant_past());
    assert!(snapshot.last_tested_version.is_untested());
}
