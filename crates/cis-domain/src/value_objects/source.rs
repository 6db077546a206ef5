//! Source type value objects
//!
//! A source type names the upstream system a connector pulls documents from.
//! Federated sources are queried live and map onto a regular source type for
//! grouping purposes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

macro_rules! source_types {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// Upstream system category of a connector
        ///
        /// Ordering follows the lexicographic order of the wire name, which is
        /// the order the dashboard lists its groups in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum SourceType {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl SourceType {
            /// Every known source type
            pub const ALL: &'static [SourceType] = &[$(SourceType::$variant),+];

            /// Wire name of the source (`google_drive`, `s3`, ...)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(SourceType::$variant => $wire,)+
                }
            }
        }

        impl FromStr for SourceType {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(SourceType::$variant),)+
                    other => Err(Error::invalid_argument(format!("Unknown source type: {other}"))),
                }
            }
        }
    };
}

source_types! {
    Web => "web",
    Github => "github",
    Gitlab => "gitlab",
    Slack => "slack",
    GoogleDrive => "google_drive",
    Gmail => "gmail",
    Bookstack => "bookstack",
    Confluence => "confluence",
    Jira => "jira",
    Productboard => "productboard",
    Slab => "slab",
    Notion => "notion",
    Guru => "guru",
    Gong => "gong",
    Zulip => "zulip",
    Linear => "linear",
    Hubspot => "hubspot",
    Document360 => "document360",
    File => "file",
    GoogleSites => "google_sites",
    Loopio => "loopio",
    Dropbox => "dropbox",
    Salesforce => "salesforce",
    Sharepoint => "sharepoint",
    Teams => "teams",
    Zendesk => "zendesk",
    Discourse => "discourse",
    Axero => "axero",
    Clickup => "clickup",
    Wikipedia => "wikipedia",
    Mediawiki => "mediawiki",
    Asana => "asana",
    S3 => "s3",
    R2 => "r2",
    GoogleCloudStorage => "google_cloud_storage",
    OciStorage => "oci_storage",
    Xenforo => "xenforo",
    Freshdesk => "freshdesk",
    Fireflies => "fireflies",
    Egnyte => "egnyte",
    Airtable => "airtable",
    Gitbook => "gitbook",
    Highspot => "highspot",
    Imap => "imap",
    Bitbucket => "bitbucket",
    Testrail => "testrail",
    Discord => "discord",
    Outline => "outline",
    NotApplicable => "not_applicable",
    IngestionApi => "ingestion_api",
}

impl PartialOrd for SourceType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source type of a federated connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FederatedSourceType {
    /// Slack searched live through the Slack API
    FederatedSlack,
}

impl FederatedSourceType {
    /// Every known federated source type
    pub const ALL: &'static [FederatedSourceType] = &[FederatedSourceType::FederatedSlack];

    /// Wire name of the federated source
    pub fn as_str(&self) -> &'static str {
        match self {
            FederatedSourceType::FederatedSlack => "federated_slack",
        }
    }
}

impl fmt::Display for FederatedSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FederatedSourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FederatedSourceType::ALL
            .iter()
            .copied()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown federated source: {s}")))
    }
}
