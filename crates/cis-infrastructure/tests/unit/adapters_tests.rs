//! Tests for the port adapters

use cis_domain::entities::IndexingSnapshot;
use cis_domain::ports::{
    FeatureFlagProvider, IndexingSnapshotSource, SourceCatalog, ToggleStateStore,
};
use cis_domain::value_objects::{AccessType, CcPairStatus, FederatedSourceType, SourceType};
use cis_infrastructure::adapters::{
    ConfigFeatureFlags, InMemorySnapshotSource, InMemoryToggleStore, JsonFileSnapshotSource,
    StaticSourceCatalog,
};
use cis_infrastructure::config::FeaturesConfig;

use crate::test_utils::{SAMPLE_SNAPSHOT, write_temp_file};

#[test]
fn test_json_file_source_reads_snapshot() {
    let (_dir, path) = write_temp_file("snapshot.json", SAMPLE_SNAPSHOT);

    let snapshot = JsonFileSnapshotSource::new(&path).load_snapshot().unwrap();

    assert_eq!(snapshot.indexing_statuses.len(), 2);
    let wiki = &snapshot.indexing_statuses[0];
    assert_eq!(wiki.source, SourceType::Confluence);
    assert_eq!(wiki.docs_indexed, 1520);
    assert!(wiki.last_success.is_some());

    let drive = &snapshot.indexing_statuses[1];
    assert_eq!(drive.access_type, AccessType::Sync);
    assert_eq!(drive.cc_pair_status, CcPairStatus::InitialIndexing);
    assert_eq!(drive.docs_indexed, 0);
    assert!(drive.last_status.is_none());

    assert_eq!(
        snapshot.federated_connectors[0].source,
        FederatedSourceType::FederatedSlack
    );
}

#[test]
fn test_json_file_source_rereads_on_every_call() {
    let (_dir, path) = write_temp_file("snapshot.json", "{}");
    let source = JsonFileSnapshotSource::new(&path);
    assert!(source.load_snapshot().unwrap().indexing_statuses.is_empty());

    std::fs::write(&path, SAMPLE_SNAPSHOT).unwrap();
    assert_eq!(source.load_snapshot().unwrap().indexing_statuses.len(), 2);
}

#[test]
fn test_json_file_source_reports_missing_and_malformed_files() {
    let missing = JsonFileSnapshotSource::new("/nonexistent/snapshot.json");
    let err = missing.load_snapshot().unwrap_err();
    assert!(err.to_string().contains("Failed to read snapshot"));

    let (_dir, path) = write_temp_file("snapshot.json", "{ not json");
    let err = JsonFileSnapshotSource::new(&path).load_snapshot().unwrap_err();
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn test_in_memory_snapshot_source_returns_its_snapshot() {
    let source = InMemorySnapshotSource::new(IndexingSnapshot::default());
    assert_eq!(source.load_snapshot().unwrap(), IndexingSnapshot::default());
}

#[test]
fn test_catalog_names_and_federated_mapping() {
    let catalog = StaticSourceCatalog::new();

    assert_eq!(catalog.display_name(SourceType::GoogleDrive), "Google Drive");
    assert_eq!(catalog.display_name(SourceType::Slack), "Slack");
    assert_eq!(
        catalog.federated_to_regular(FederatedSourceType::FederatedSlack),
        SourceType::Slack
    );
    for source in SourceType::ALL {
        assert!(!catalog.display_name(*source).is_empty());
        assert!(!catalog.icon(*source).is_empty());
    }
}

#[test]
fn test_feature_flags_follow_config() {
    assert!(!ConfigFeatureFlags::default().paid_enterprise_features_enabled());

    let enabled = ConfigFeatureFlags::new(FeaturesConfig {
        paid_enterprise_features_enabled: true,
    });
    assert!(enabled.paid_enterprise_features_enabled());
}

#[test]
fn test_in_memory_toggle_store_shares_value_between_clones() {
    let store = InMemoryToggleStore::new();
    assert_eq!(store.load().unwrap(), None);

    let clone = store.clone();
    clone.save(r#"{"web":true}"#).unwrap();

    assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"web":true}"#));
    assert_eq!(
        InMemoryToggleStore::with_value("x").load().unwrap().as_deref(),
        Some("x")
    );
}
