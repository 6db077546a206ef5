//! Static source catalog
//!
//! Compiled-in display names and icons for every source type.

use cis_domain::ports::SourceCatalog;
use cis_domain::value_objects::{FederatedSourceType, SourceType};

/// Catalog backed by compiled-in tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSourceCatalog;

impl StaticSourceCatalog {
    /// Create the catalog
    pub fn new() -> Self {
        Self
    }
}

impl SourceCatalog for StaticSourceCatalog {
    fn display_name(&self, source: SourceType) -> String {
        display_name(source).to_string()
    }

    fn icon(&self, source: SourceType) -> &'static str {
        icon(source)
    }

    fn federated_to_regular(&self, source: FederatedSourceType) -> SourceType {
        match source {
            FederatedSourceType::FederatedSlack => SourceType::Slack,
        }
    }
}

fn display_name(source: SourceType) -> &'static str {
    match source {
        SourceType::Web => "Web",
        SourceType::Github => "Github",
        SourceType::Gitlab => "Gitlab",
        SourceType::Slack => "Slack",
        SourceType::GoogleDrive => "Google Drive",
        SourceType::Gmail => "Gmail",
        SourceType::Bookstack => "BookStack",
        SourceType::Confluence => "Confluence",
        SourceType::Jira => "Jira",
        SourceType::Productboard => "Productboard",
        SourceType::Slab => "Slab",
        SourceType::Notion => "Notion",
        SourceType::Guru => "Guru",
        SourceType::Gong => "Gong",
        SourceType::Zulip => "Zulip",
        SourceType::Linear => "Linear",
        SourceType::Hubspot => "HubSpot",
        SourceType::Document360 => "Document360",
        SourceType::File => "File",
        SourceType::GoogleSites => "Google Sites",
        SourceType::Loopio => "Loopio",
        SourceType::Dropbox => "Dropbox",
        SourceType::Salesforce => "Salesforce",
        SourceType::Sharepoint => "Sharepoint",
        SourceType::Teams => "Teams",
        SourceType::Zendesk => "Zendesk",
        SourceType::Discourse => "Discourse",
        SourceType::Axero => "Axero",
        SourceType::Clickup => "Clickup",
        SourceType::Wikipedia => "Wikipedia",
        SourceType::Mediawiki => "MediaWiki",
        SourceType::Asana => "Asana",
        SourceType::S3 => "S3",
        SourceType::R2 => "R2",
        SourceType::GoogleCloudStorage => "Google Cloud Storage",
        SourceType::OciStorage => "Oracle Storage",
        SourceType::Xenforo => "XenForo",
        SourceType::Freshdesk => "Freshdesk",
        SourceType::Fireflies => "Fireflies",
        SourceType::Egnyte => "Egnyte",
        SourceType::Airtable => "Airtable",
        SourceType::Gitbook => "GitBook",
        SourceType::Highspot => "Highspot",
        SourceType::Imap => "Email",
        SourceType::Bitbucket => "Bitbucket",
        SourceType::Testrail => "TestRail",
        SourceType::Discord => "Discord",
        SourceType::Outline => "Outline",
        SourceType::NotApplicable => "Not Applicable",
        SourceType::IngestionApi => "Ingestion",
    }
}

fn icon(source: SourceType) -> &'static str {
    match source {
        SourceType::Web | SourceType::Wikipedia | SourceType::Mediawiki => "🌐",
        SourceType::Github | SourceType::Gitlab | SourceType::Bitbucket => "🐙",
        SourceType::Slack | SourceType::Teams | SourceType::Zulip | SourceType::Discord => "💬",
        SourceType::Gmail | SourceType::Imap => "✉️",
        SourceType::GoogleDrive
        | SourceType::Dropbox
        | SourceType::Sharepoint
        | SourceType::Egnyte => "📁",
        SourceType::S3
        | SourceType::R2
        | SourceType::GoogleCloudStorage
        | SourceType::OciStorage => "🪣",
        SourceType::Jira
        | SourceType::Linear
        | SourceType::Asana
        | SourceType::Clickup
        | SourceType::Testrail
        | SourceType::Productboard => "📋",
        SourceType::Zendesk | SourceType::Freshdesk | SourceType::Hubspot | SourceType::Salesforce => {
            "🎧"
        }
        SourceType::Gong | SourceType::Fireflies => "🎙️",
        SourceType::Discourse | SourceType::Xenforo => "🗨️",
        SourceType::File => "📄",
        SourceType::Airtable => "🗃️",
        SourceType::NotApplicable | SourceType::IngestionApi => "⚙️",
        _ => "📚",
    }
}
