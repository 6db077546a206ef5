//! Source Catalog Port
//!
//! Pure lookups describing source types for presentation.

use crate::value_objects::{FederatedSourceType, SourceType};

/// Display metadata for source types
pub trait SourceCatalog: Send + Sync {
    /// Human readable name (`google_drive` -> `Google Drive`)
    fn display_name(&self, source: SourceType) -> String;

    /// Icon glyph rendered next to the name
    fn icon(&self, source: SourceType) -> &'static str;

    /// Regular source type a federated source is grouped under
    fn federated_to_regular(&self, source: FederatedSourceType) -> SourceType;
}
