//! Unit tests for source type value objects

use cis_domain::value_objects::{FederatedSourceType, SourceType};

#[test]
fn test_source_type_round_trips_through_wire_name() {
    for source in SourceType::ALL {
        let parsed: SourceType = source.as_str().parse().expect("known wire name");
        assert_eq!(parsed, *source);
    }
}

#[test]
fn test_source_type_serializes_as_wire_name() {
    let json = serde_json::to_string(&SourceType::GoogleDrive).expect("serialize");
    assert_eq!(json, "\"google_drive\"");

    let parsed: SourceType = serde_json::from_str("\"oci_storage\"").expect("deserialize");
    assert_eq!(parsed, SourceType::OciStorage);
}

#[test]
fn test_source_type_orders_lexicographically() {
    let mut sources = vec![SourceType::Web, SourceType::S3, SourceType::Confluence, SourceType::Asana];
    sources.sort();
    assert_eq!(
        sources,
        vec![SourceType::Asana, SourceType::Confluence, SourceType::S3, SourceType::Web]
    );
}

#[test]
fn test_unknown_source_type_is_rejected() {
    assert!("not_a_source".parse::<SourceType>().is_err());
}

#[test]
fn test_federated_source_parse() {
    let parsed: FederatedSourceType = "federated_slack".parse().expect("known source");
    assert_eq!(parsed, FederatedSourceType::FederatedSlack);
    assert_eq!(parsed.to_string(), "federated_slack");
    assert!("slack".parse::<FederatedSourceType>().is_err());
}
