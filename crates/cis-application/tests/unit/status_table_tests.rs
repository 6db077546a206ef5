//! Tests for table assembly

use cis_application::domain_services::SearchMatcher;
use cis_application::use_cases::{
    AccessBadge, StatusBadge, StatusTableBuilder, TableRow, compute_view,
};
use cis_domain::entities::ConnectorIndexingStatus;
use cis_domain::value_objects::{
    AccessType, CcPairStatus, FilterOptions, IndexingStatus, SourceType, ToggleState,
};

use crate::test_utils::{
    FixedCatalog, connector, connector_in_state, connector_with_access, federated_slack,
    running_connector,
};

fn expanded(sources: &[SourceType]) -> ToggleState {
    sources.iter().map(|s| (*s, true)).collect()
}

#[test]
fn test_collapsed_sections_have_no_rows() {
    let all = vec![connector(1, "docs", SourceType::Web)];
    let view = compute_view(&all, &[], &[], &FilterOptions::none(), &FixedCatalog);

    let table = StatusTableBuilder::new(&FixedCatalog, false).build(
        &view,
        &ToggleState::new(),
        &SearchMatcher::default(),
    );

    assert_eq!(table.sections.len(), 1);
    assert!(!table.sections[0].expanded);
    assert!(table.sections[0].rows.is_empty());
    assert!(table.should_expand_all);
}

#[test]
fn test_expanded_section_lists_connectors_then_federated() {
    let all = vec![connector(1, "eng", SourceType::Slack)];
    let federated = vec![federated_slack(7, "live")];
    let view = compute_view(&all, &all, &federated, &FilterOptions::none(), &FixedCatalog);

    let table = StatusTableBuilder::new(&FixedCatalog, true).build(
        &view,
        &expanded(&[SourceType::Slack]),
        &SearchMatcher::default(),
    );
    let section = &table.sections[0];

    assert_eq!(section.display_name, "Slack");
    assert_eq!(section.summary.count, 2);
    assert_eq!(section.rows.len(), 2);
    match &section.rows[0] {
        TableRow::Connector(row) => {
            assert_eq!(row.detail_path, "/admin/connector/1");
            assert!(row.editable);
        }
        other => panic!("expected connector row, got {other:?}"),
    }
    match &section.rows[1] {
        TableRow::Federated(row) => assert_eq!(row.detail_path, "/admin/federated/7"),
        other => panic!("expected federated row, got {other:?}"),
    }
    assert!(!table.should_expand_all);
}

#[test]
fn test_hidden_sources_are_skipped() {
    let all = vec![
        connector(1, "api", SourceType::IngestionApi),
        connector(2, "na", SourceType::NotApplicable),
        connector(3, "docs", SourceType::Web),
    ];
    let view = compute_view(&all, &[], &[], &FilterOptions::none(), &FixedCatalog);
    let hidden = [SourceType::NotApplicable, SourceType::IngestionApi];

    let table = StatusTableBuilder::new(&FixedCatalog, false)
        .with_hidden_sources(&hidden)
        .build(&view, &ToggleState::new(), &SearchMatcher::default());

    let sources: Vec<SourceType> = table.sections.iter().map(|s| s.source).collect();
    assert_eq!(sources, vec![SourceType::Web]);
}

#[test]
fn test_search_matches_display_name_and_narrows_rows() {
    let all = vec![
        connector(1, "Team Drive", SourceType::GoogleDrive),
        connector(2, "Archive", SourceType::GoogleDrive),
        connector(3, "Engineering", SourceType::Web),
        connector(4, "Docs", SourceType::Web),
    ];
    let view = compute_view(&all, &[], &[], &FilterOptions::none(), &FixedCatalog);
    let toggles = expanded(&[SourceType::GoogleDrive, SourceType::Web]);
    let builder = StatusTableBuilder::new(&FixedCatalog, false);

    let by_label = builder.build(&view, &toggles, &SearchMatcher::new("google drive"));
    assert_eq!(by_label.sections.len(), 1);
    assert_eq!(by_label.sections[0].rows.len(), 2);

    let by_name = builder.build(&view, &toggles, &SearchMatcher::new("engin"));
    assert_eq!(by_name.sections.len(), 1);
    assert_eq!(by_name.sections[0].source, SourceType::Web);
    assert_eq!(by_name.sections[0].rows.len(), 1);
}

#[test]
fn test_search_applies_after_filtering() {
    let all = vec![
        connector_with_access(1, SourceType::Web, AccessType::Public),
        connector_with_access(2, SourceType::Web, AccessType::Private),
    ];
    let filters = FilterOptions::none().with_access_types([AccessType::Public]);
    let view = compute_view(&all, &[], &[], &filters, &FixedCatalog);

    let table = StatusTableBuilder::new(&FixedCatalog, false).build(
        &view,
        &expanded(&[SourceType::Web]),
        &SearchMatcher::new("web"),
    );

    assert_eq!(table.sections[0].rows.len(), 1);
}

#[test]
fn test_status_badges() {
    let mut unfinished = connector(1, "new", SourceType::Web);
    unfinished.last_finished_status = None;
    unfinished.last_status = Some(IndexingStatus::NotStarted);
    assert_eq!(StatusBadge::for_connector(&unfinished), StatusBadge::Scheduled);

    unfinished.last_status = Some(IndexingStatus::InProgress);
    assert_eq!(StatusBadge::for_connector(&unfinished), StatusBadge::InitialIndexing);

    let mut erroring = connector(2, "err", SourceType::Web);
    erroring.in_repeated_error_state = true;
    assert_eq!(StatusBadge::for_connector(&erroring), StatusBadge::Error);

    let paused = connector_in_state(3, SourceType::Web, CcPairStatus::Paused);
    assert_eq!(StatusBadge::for_connector(&paused), StatusBadge::Paused);

    let deleting = connector_in_state(4, SourceType::Web, CcPairStatus::Deleting);
    assert_eq!(StatusBadge::for_connector(&deleting).label(), "Deleting");

    assert_eq!(StatusBadge::for_connector(&running_connector(5, SourceType::Web)), StatusBadge::Indexing);
    assert_eq!(StatusBadge::for_connector(&connector(6, "ok", SourceType::Web)), StatusBadge::Active);
}

#[test]
fn test_access_badges() {
    let badge = |status: &ConnectorIndexingStatus| AccessBadge::for_connector(status, &FixedCatalog).label();

    assert_eq!(badge(&connector_with_access(1, SourceType::Web, AccessType::Public)), "Organization Public");
    assert_eq!(badge(&connector_with_access(2, SourceType::Web, AccessType::Private)), "Private");
    assert_eq!(
        badge(&connector_with_access(3, SourceType::GoogleDrive, AccessType::Sync)),
        "Inherited from Google Drive"
    );
}
