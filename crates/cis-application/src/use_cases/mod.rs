//! Use cases
//!
//! Orchestrate the domain services into what the dashboard renders.

pub mod status_table;
pub mod status_view;

pub use status_table::{
    AccessBadge, ConnectorRow, FederatedRow, SourceSection, StatusBadge, StatusTable,
    StatusTableBuilder, TableRow,
};
pub use status_view::{IndexingStatusView, compute_snapshot_view, compute_view};
