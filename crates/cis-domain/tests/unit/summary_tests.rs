//! Unit tests for the connector summary

use cis_domain::value_objects::ConnectorSummary;

#[test]
fn test_federated_only_summary() {
    let summary = ConnectorSummary::federated_only(4);
    assert_eq!(
        summary,
        ConnectorSummary {
            count: 4,
            active: 4,
            public: 0,
            total_docs_indexed: 0,
            errors: 0,
        }
    );
}

#[test]
fn test_active_percentage_guards_empty_group() {
    assert_eq!(ConnectorSummary::default().active_percentage(), None);
}

#[test]
fn test_active_percentage() {
    let summary = ConnectorSummary {
        count: 4,
        active: 1,
        ..ConnectorSummary::default()
    };
    let pct = summary.active_percentage().expect("non-empty group");
    assert!((pct - 25.0).abs() < f64::EPSILON);
}
