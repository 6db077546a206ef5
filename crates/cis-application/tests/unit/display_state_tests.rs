//! Tests for the display state controller

use cis_application::domain_services::DisplayStateController;
use cis_domain::value_objects::SourceType;

use crate::test_utils::{BrokenStore, SharedStore};

const SOURCES: [SourceType; 3] = [SourceType::Github, SourceType::Slack, SourceType::Web];

#[test]
fn test_load_reads_persisted_state() {
    let store = SharedStore::with_value(r#"{"slack":true}"#);
    let controller = DisplayStateController::load(store);

    assert!(controller.is_expanded(SourceType::Slack));
    assert!(!controller.is_expanded(SourceType::Web));
}

#[test]
fn test_corrupt_or_unreadable_state_starts_empty() {
    let corrupt = DisplayStateController::load(SharedStore::with_value("not-json"));
    assert!(corrupt.state().is_empty());

    let broken = DisplayStateController::load(BrokenStore);
    assert!(broken.state().is_empty());
}

#[test]
fn test_toggle_twice_restores_original_state() {
    let store = SharedStore::default();
    let mut controller = DisplayStateController::load(store.clone());

    assert!(controller.toggle(SourceType::Web, None).unwrap());
    assert!(!controller.toggle(SourceType::Web, None).unwrap());
    assert!(!controller.is_expanded(SourceType::Web));
    assert_eq!(store.saves(), 2);
}

#[test]
fn test_forced_toggle_sets_explicit_state() {
    let mut controller = DisplayStateController::load(SharedStore::with_value(r#"{"web":true}"#));

    assert!(controller.toggle(SourceType::Web, Some(true)).unwrap());
    assert!(controller.is_expanded(SourceType::Web));
    assert!(!controller.toggle(SourceType::Web, Some(false)).unwrap());
}

#[test]
fn test_every_transition_writes_the_full_map() {
    let store = SharedStore::default();
    let mut controller = DisplayStateController::load(store.clone());

    controller.toggle(SourceType::Web, None).unwrap();
    controller.toggle(SourceType::Slack, None).unwrap();

    assert_eq!(store.value().as_deref(), Some(r#"{"slack":true,"web":true}"#));
}

#[test]
fn test_expand_all_then_collapse_all_collapses_everything() {
    let mut controller = DisplayStateController::load(SharedStore::with_value(r#"{"web":true}"#));

    assert!(controller.should_expand_all(&SOURCES));
    assert!(controller.toggle_all(&SOURCES).unwrap());
    assert!(SOURCES.iter().all(|s| controller.is_expanded(*s)));

    assert!(!controller.should_expand_all(&SOURCES));
    assert!(!controller.toggle_all(&SOURCES).unwrap());
    assert!(SOURCES.iter().all(|s| !controller.is_expanded(*s)));
}

#[test]
fn test_toggle_all_replaces_entries_outside_sorted_sources() {
    let mut controller =
        DisplayStateController::load(SharedStore::with_value(r#"{"jira":true}"#));

    controller.toggle_all(&SOURCES).unwrap();

    assert!(!controller.is_expanded(SourceType::Jira));
    assert_eq!(controller.state().len(), SOURCES.len());
}

#[test]
fn test_entries_outside_sorted_sources_do_not_count() {
    let controller = DisplayStateController::load(SharedStore::with_value(
        r#"{"github":true,"slack":true,"web":true,"jira":true}"#,
    ));
    assert!(!controller.should_expand_all(&SOURCES));

    let partial = DisplayStateController::load(SharedStore::with_value(
        r#"{"github":true,"slack":true,"jira":true}"#,
    ));
    assert!(partial.should_expand_all(&SOURCES));
}

#[test]
fn test_expand_sources_never_collapses() {
    let store = SharedStore::with_value(r#"{"github":true}"#);
    let mut controller = DisplayStateController::load(store.clone());

    controller.expand_sources(&[SourceType::Web]).unwrap();

    assert!(controller.is_expanded(SourceType::Github));
    assert!(controller.is_expanded(SourceType::Web));
    assert_eq!(store.value().as_deref(), Some(r#"{"github":true,"web":true}"#));
}

#[test]
fn test_persist_failure_is_reported() {
    let mut controller = DisplayStateController::load(BrokenStore);
    assert!(controller.toggle(SourceType::Web, None).is_err());
}
