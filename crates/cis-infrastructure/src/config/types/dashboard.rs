//! Dashboard configuration types

use std::path::PathBuf;

use cis_domain::constants::{DEFAULT_HIDDEN_SOURCES, TOGGLED_CONNECTORS_COOKIE_NAME};
use cis_domain::value_objects::SourceType;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SNAPSHOT_FILENAME;

/// Dashboard data and display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON snapshot handed over by the data-fetch layer
    pub snapshot_path: PathBuf,

    /// Cookie holding the expand/collapse map
    pub cookie_name: String,

    /// Sources never rendered as a group
    pub hidden_sources: Vec<SourceType>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILENAME),
            cookie_name: TOGGLED_CONNECTORS_COOKIE_NAME.to_string(),
            hidden_sources: DEFAULT_HIDDEN_SOURCES.to_vec(),
        }
    }
}
