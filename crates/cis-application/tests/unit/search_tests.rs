//! Tests for the search matcher

use cis_application::domain_services::SearchMatcher;
use cis_domain::value_objects::SourceType;

use crate::test_utils::{connector, federated_slack};

#[test]
fn test_empty_query_shows_every_member() {
    let statuses = vec![connector(1, "eng", SourceType::Slack), connector(2, "ops", SourceType::Slack)];
    let federated = vec![federated_slack(3, "live")];

    let matched = SearchMatcher::new("")
        .match_source(&["slack", "Slack"], &statuses, &federated)
        .unwrap();

    assert!(matched.broad);
    assert_eq!(matched.statuses.len(), 2);
    assert_eq!(matched.federated.len(), 1);
}

#[test]
fn test_source_label_match_shows_all_members() {
    let statuses = vec![connector(1, "eng", SourceType::GoogleDrive), connector(2, "ops", SourceType::GoogleDrive)];

    let matched = SearchMatcher::new("DRIVE")
        .match_source(&["google_drive", "Google Drive"], &statuses, &[])
        .unwrap();

    assert!(matched.broad);
    assert_eq!(matched.statuses.len(), 2);
}

#[test]
fn test_nested_name_match_shows_only_matching_members() {
    let statuses = vec![
        connector(1, "Engineering Wiki", SourceType::Web),
        connector(2, "Marketing Site", SourceType::Web),
    ];
    let federated = vec![federated_slack(3, "wiki mirror"), federated_slack(4, "sales")];

    let matched = SearchMatcher::new("wiki")
        .match_source(&["web", "Web"], &statuses, &federated)
        .unwrap();

    assert!(!matched.broad);
    assert_eq!(matched.statuses.len(), 1);
    assert_eq!(matched.statuses[0].cc_pair_id, 1);
    assert_eq!(matched.federated.len(), 1);
    assert_eq!(matched.federated[0].id, 3);
}

#[test]
fn test_federated_name_alone_makes_group_eligible() {
    let federated = vec![federated_slack(9, "Support Channels")];

    let matched = SearchMatcher::new("support")
        .match_source(&["slack", "Slack"], &[], &federated)
        .unwrap();

    assert!(matched.statuses.is_empty());
    assert_eq!(matched.federated.len(), 1);
}

#[test]
fn test_no_match_hides_group() {
    let statuses = vec![connector(1, "eng", SourceType::Web)];

    assert!(SearchMatcher::new("zzz")
        .match_source(&["web", "Web"], &statuses, &[])
        .is_none());
}

#[test]
fn test_query_is_lower_cased() {
    let matcher = SearchMatcher::new("GitHub");
    assert_eq!(matcher.query(), "github");
    assert!(matcher.matches_text("my GITHUB org"));
    assert!(!matcher.is_empty());
    assert!(SearchMatcher::default().is_empty());
}
