//! Tests for per-source summaries

use cis_application::domain_services::summary::federated_only_sources;
use cis_application::domain_services::{
    SourceGroups, federated_by_source, summarize, summarize_group,
};
use cis_domain::value_objects::{AccessType, CcPairStatus, ConnectorSummary, SourceType};

use crate::test_utils::{
    FixedCatalog, connector, connector_in_state, connector_with_access, connector_with_docs,
    failed_connector, federated_slack,
};

#[test]
fn test_summarize_group_counts() {
    let statuses = vec![
        connector_with_docs(1, SourceType::Web, 10),
        connector_with_access(2, SourceType::Web, AccessType::Private),
        failed_connector(3, SourceType::Web),
        connector_in_state(4, SourceType::Web, CcPairStatus::Paused),
    ];

    let summary = summarize_group(&statuses, 0);

    assert_eq!(summary.count, 4);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.public, 3);
    assert_eq!(summary.total_docs_indexed, 10);
    assert_eq!(summary.errors, 1);
}

#[test]
fn test_summary_bounds_hold() {
    let statuses = vec![
        connector(1, "a", SourceType::Web),
        failed_connector(2, SourceType::Web),
        connector_with_access(3, SourceType::Web, AccessType::Sync),
    ];

    for federated in [0, 1, 5] {
        let summary = summarize_group(&statuses, federated);
        assert!(summary.active <= summary.count);
        assert!(summary.public <= summary.count);
        assert!(summary.errors <= summary.count);
    }
}

#[test]
fn test_federated_connectors_count_as_active_but_not_public() {
    // A: 3 records with 2 active, B: 1 inactive record plus 2 federated
    let mut slack = connector_in_state(4, SourceType::Slack, CcPairStatus::Paused);
    slack.docs_indexed = 77;
    let all = vec![
        connector(1, "a1", SourceType::Github),
        connector(2, "a2", SourceType::Github),
        connector_in_state(3, SourceType::Github, CcPairStatus::Paused),
        slack,
    ];
    let federated = vec![federated_slack(10, "fs-1"), federated_slack(11, "fs-2")];

    let groups = SourceGroups::group(&all, &[]);
    let by_source = federated_by_source(&federated, &FixedCatalog);
    let summaries = summarize(&groups, &by_source);

    let github = summaries[&SourceType::Github];
    assert_eq!((github.count, github.active), (3, 2));

    let slack = summaries[&SourceType::Slack];
    assert_eq!(slack.count, 3);
    assert_eq!(slack.active, 2);
    assert_eq!(slack.public, 1);
    assert_eq!(slack.total_docs_indexed, 77);
}

#[test]
fn test_federated_only_source_summary() {
    let federated = vec![
        federated_slack(1, "one"),
        federated_slack(2, "two"),
        federated_slack(3, "three"),
    ];
    let groups = SourceGroups::group(&[], &[]);
    let summaries = summarize(&groups, &federated_by_source(&federated, &FixedCatalog));

    assert_eq!(
        summaries[&SourceType::Slack],
        ConnectorSummary {
            count: 3,
            active: 3,
            public: 0,
            total_docs_indexed: 0,
            errors: 0,
        }
    );
}

#[test]
fn test_federated_only_sources_skip_grouped_sources() {
    let federated = vec![federated_slack(1, "one"), federated_slack(2, "two")];

    let empty = SourceGroups::group(&[], &[]);
    assert_eq!(
        federated_only_sources(&empty, &federated, &FixedCatalog),
        vec![SourceType::Slack]
    );

    let with_slack = SourceGroups::group(&[connector(9, "eng", SourceType::Slack)], &[]);
    assert!(federated_only_sources(&with_slack, &federated, &FixedCatalog).is_empty());
}

#[test]
fn test_empty_group_summary_is_zero() {
    assert_eq!(summarize_group(&[], 0), ConnectorSummary::default());
}
