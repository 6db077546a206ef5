//! Domain services
//!
//! Pure derivations over the connector snapshot.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`grouping`] | Groups records by source, editable first |
//! | [`summary`] | Per-source counts including federated connectors |
//! | [`filter`] | Access, status and document count filters |
//! | [`search`] | Case-insensitive name/label search |
//! | [`display_state`] | Expand/collapse state with write-through persistence |

pub mod display_state;
pub mod filter;
pub mod grouping;
pub mod search;
pub mod summary;

pub use display_state::DisplayStateController;
pub use filter::{FilterEvaluator, FilteredGroups};
pub use grouping::SourceGroups;
pub use search::{SearchMatcher, SourceMatch};
pub use summary::{FederatedBySource, federated_by_source, summarize, summarize_group};
