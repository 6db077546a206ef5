//! Status enumerations reported by the indexing backend

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Visibility scope of a connector's indexed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    /// Visible to the whole organization
    Public,
    /// Visible to explicitly granted users and groups
    Private,
    /// Permissions inherited from the source system
    Sync,
}

impl AccessType {
    /// Every access type, in display order
    pub const ALL: [AccessType; 3] = [AccessType::Public, AccessType::Private, AccessType::Sync];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "public",
            AccessType::Private => "private",
            AccessType::Sync => "sync",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessType::ALL
            .into_iter()
            .find(|access| access.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown access type: {s}")))
    }
}

/// Outcome of an index attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexingStatus {
    /// Finished without errors
    Success,
    /// Finished, but some documents failed
    CompletedWithErrors,
    /// Stopped by a user
    Canceled,
    /// Failed outright
    Failed,
    /// Currently running
    InProgress,
    /// Queued but not picked up yet
    NotStarted,
    /// Attempt could not run with the current configuration
    Invalid,
}

impl IndexingStatus {
    /// Every status, in display order
    pub const ALL: [IndexingStatus; 7] = [
        IndexingStatus::Success,
        IndexingStatus::CompletedWithErrors,
        IndexingStatus::Canceled,
        IndexingStatus::Failed,
        IndexingStatus::InProgress,
        IndexingStatus::NotStarted,
        IndexingStatus::Invalid,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexingStatus::Success => "success",
            IndexingStatus::CompletedWithErrors => "completed_with_errors",
            IndexingStatus::Canceled => "canceled",
            IndexingStatus::Failed => "failed",
            IndexingStatus::InProgress => "in_progress",
            IndexingStatus::NotStarted => "not_started",
            IndexingStatus::Invalid => "invalid",
        }
    }

    /// Human readable label (`completed_with_errors` -> `completed with errors`)
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for IndexingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown indexing status: {s}")))
    }
}

/// Overall state of a connector/credential pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CcPairStatus {
    /// Waiting for its first run
    Scheduled,
    /// First run in progress
    InitialIndexing,
    /// Indexing on schedule
    Active,
    /// Disabled by an admin
    Paused,
    /// Being removed
    Deleting,
    /// Configuration no longer valid
    Invalid,
}

impl CcPairStatus {
    /// Label shown in the status badge
    pub fn label(&self) -> &'static str {
        match self {
            CcPairStatus::Scheduled => "Scheduled",
            CcPairStatus::InitialIndexing => "Initial Indexing",
            CcPairStatus::Active => "Active",
            CcPairStatus::Paused => "Paused",
            CcPairStatus::Deleting => "Deleting",
            CcPairStatus::Invalid => "Invalid",
        }
    }
}
