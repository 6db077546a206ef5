//! Unit tests for the toggle state codec

use cis_domain::value_objects::{SourceType, ToggleState};

#[test]
fn test_missing_entry_is_collapsed() {
    let state = ToggleState::new();
    assert!(!state.is_expanded(SourceType::Slack));
}

#[test]
fn test_to_json_writes_flat_object() {
    let mut state = ToggleState::new();
    state.set(SourceType::Slack, true);
    state.set(SourceType::Web, false);
    assert_eq!(state.to_json().unwrap(), r#"{"slack":true,"web":false}"#);
}

#[test]
fn test_from_json_lossy_reads_valid_blob() {
    let state = ToggleState::from_json_lossy(r#"{"github":true,"jira":false}"#);
    assert!(state.is_expanded(SourceType::Github));
    assert!(!state.is_expanded(SourceType::Jira));
    assert_eq!(state.len(), 2);
}

#[test]
fn test_from_json_lossy_falls_back_on_garbage() {
    assert!(ToggleState::from_json_lossy("{not json").is_empty());
    assert!(ToggleState::from_json_lossy("[true]").is_empty());
    assert!(ToggleState::from_json_lossy("").is_empty());
}

#[test]
fn test_from_json_lossy_drops_unknown_and_non_bool_entries() {
    let state = ToggleState::from_json_lossy(r#"{"slack":true,"mystery":true,"web":"yes"}"#);
    assert_eq!(state.len(), 1);
    assert!(state.is_expanded(SourceType::Slack));
}

#[test]
fn test_expanded_count_only_counts_listed_sources() {
    let state: ToggleState = [
        (SourceType::Slack, true),
        (SourceType::Web, true),
        (SourceType::File, false),
    ]
    .into_iter()
    .collect();

    assert_eq!(state.expanded_count(&[SourceType::Slack, SourceType::File]), 1);
}
