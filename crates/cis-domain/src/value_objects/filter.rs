//! Filter value objects
//!
//! User-controlled narrowing of the dashboard. Every field is independently
//! optional; an absent (or empty) field places no constraint on the records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::status::{AccessType, IndexingStatus};
use crate::error::Error;

/// Comparison applied to a connector's document count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Strictly greater than
    #[serde(rename = ">")]
    GreaterThan,
    /// Strictly less than
    #[serde(rename = "<")]
    LessThan,
    /// Exactly equal
    #[serde(rename = "=")]
    Equal,
}

impl ComparisonOperator {
    /// Symbol shown in filter chips
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::Equal => "=",
        }
    }

    /// Short mnemonic used in query strings
    pub fn mnemonic(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThan => "gt",
            ComparisonOperator::LessThan => "lt",
            ComparisonOperator::Equal => "eq",
        }
    }

    /// Evaluate `lhs <op> rhs`
    pub fn compare(&self, lhs: u64, rhs: u64) -> bool {
        match self {
            ComparisonOperator::GreaterThan => lhs > rhs,
            ComparisonOperator::LessThan => lhs < rhs,
            ComparisonOperator::Equal => lhs == rhs,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" | "gt" => Ok(ComparisonOperator::GreaterThan),
            "<" | "lt" => Ok(ComparisonOperator::LessThan),
            "=" | "eq" => Ok(ComparisonOperator::Equal),
            other => Err(Error::invalid_argument(format!(
                "Unknown comparison operator: {other}"
            ))),
        }
    }
}

/// Numeric constraint on the document count
///
/// An operator without a value is not yet a constraint: every record passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsCountFilter {
    /// Chosen comparison, if any
    pub operator: Option<ComparisonOperator>,
    /// Value to compare against, if any
    pub value: Option<u64>,
}

impl DocsCountFilter {
    /// Create a complete docs-count constraint
    pub fn new(operator: ComparisonOperator, value: u64) -> Self {
        Self {
            operator: Some(operator),
            value: Some(value),
        }
    }
}

/// Complete set of dashboard filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Allowed access types
    #[serde(default)]
    pub access_type: Option<Vec<AccessType>>,
    /// Allowed last-run statuses
    #[serde(default)]
    pub last_status: Option<Vec<IndexingStatus>>,
    /// Document count comparison
    #[serde(default)]
    pub docs_count_filter: DocsCountFilter,
}

impl FilterOptions {
    /// Filters that constrain nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Restrict to the given access types
    pub fn with_access_types(mut self, access: impl IntoIterator<Item = AccessType>) -> Self {
        self.access_type = Some(access.into_iter().collect());
        self
    }

    /// Restrict to the given last-run statuses
    pub fn with_last_statuses(
        mut self,
        statuses: impl IntoIterator<Item = IndexingStatus>,
    ) -> Self {
        self.last_status = Some(statuses.into_iter().collect());
        self
    }

    /// Set the document count comparison
    pub fn with_docs_count(mut self, filter: DocsCountFilter) -> Self {
        self.docs_count_filter = filter;
        self
    }

    /// Non-empty access constraint, if any
    pub fn access_constraint(&self) -> Option<&[AccessType]> {
        self.access_type.as_deref().filter(|list| !list.is_empty())
    }

    /// Non-empty status constraint, if any
    pub fn status_constraint(&self) -> Option<&[IndexingStatus]> {
        self.last_status.as_deref().filter(|list| !list.is_empty())
    }

    /// Whether any filter is switched on
    ///
    /// A docs operator without a value still counts: the dashboard narrows
    /// its source list as soon as an operator is picked.
    pub fn is_active(&self) -> bool {
        self.access_constraint().is_some()
            || self.status_constraint().is_some()
            || self.docs_count_filter.operator.is_some()
    }
}
