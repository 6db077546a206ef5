//! Unit tests for filter value objects

use cis_domain::value_objects::{
    AccessType, ComparisonOperator, DocsCountFilter, FilterOptions, IndexingStatus,
};

#[test]
fn test_default_filters_are_inactive() {
    assert!(!FilterOptions::none().is_active());
}

#[test]
fn test_empty_lists_are_not_constraints() {
    let filters = FilterOptions::none()
        .with_access_types([])
        .with_last_statuses([]);
    assert!(filters.access_constraint().is_none());
    assert!(filters.status_constraint().is_none());
    assert!(!filters.is_active());
}

#[test]
fn test_operator_without_value_is_active() {
    let filters = FilterOptions::none().with_docs_count(DocsCountFilter {
        operator: Some(ComparisonOperator::GreaterThan),
        value: None,
    });
    assert!(filters.is_active());
}

#[test]
fn test_access_filter_is_active() {
    let filters = FilterOptions::none().with_access_types([AccessType::Public]);
    assert!(filters.is_active());
    assert_eq!(filters.access_constraint(), Some(&[AccessType::Public][..]));
}

#[test]
fn test_comparison_operator_parse_accepts_symbols_and_mnemonics() {
    assert_eq!(">".parse::<ComparisonOperator>().unwrap(), ComparisonOperator::GreaterThan);
    assert_eq!("lt".parse::<ComparisonOperator>().unwrap(), ComparisonOperator::LessThan);
    assert_eq!("=".parse::<ComparisonOperator>().unwrap(), ComparisonOperator::Equal);
    assert!(">=".parse::<ComparisonOperator>().is_err());
}

#[test]
fn test_comparison_operator_compare() {
    assert!(ComparisonOperator::GreaterThan.compare(150, 100));
    assert!(!ComparisonOperator::GreaterThan.compare(100, 100));
    assert!(ComparisonOperator::LessThan.compare(50, 100));
    assert!(ComparisonOperator::Equal.compare(100, 100));
    assert!(!ComparisonOperator::Equal.compare(101, 100));
}

#[test]
fn test_filter_options_serialization_uses_symbols() {
    let filters = FilterOptions::none()
        .with_last_statuses([IndexingStatus::Failed])
        .with_docs_count(DocsCountFilter::new(ComparisonOperator::LessThan, 10));
    let json = serde_json::to_string(&filters).expect("serialize");
    assert!(json.contains("\"operator\":\"<\""));
    assert!(json.contains("\"failed\""));

    let parsed: FilterOptions = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, filters);
}

#[test]
fn test_indexing_status_label() {
    assert_eq!(IndexingStatus::CompletedWithErrors.label(), "completed with errors");
    assert_eq!(IndexingStatus::Success.label(), "success");
}
