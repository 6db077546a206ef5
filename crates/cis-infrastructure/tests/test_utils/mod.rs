//! Test utilities for cis-infrastructure tests

use std::path::PathBuf;

use tempfile::TempDir;

/// Snapshot in the JSON format written by the data-fetch layer
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "indexing_statuses": [
    {
      "cc_pair_id": 1,
      "name": "Engineering Wiki",
      "source": "confluence",
      "access_type": "public",
      "last_success": "2026-01-05T10:00:00Z",
      "last_status": "success",
      "last_finished_status": "success",
      "docs_indexed": 1520,
      "cc_pair_status": "ACTIVE",
      "in_repeated_error_state": false,
      "latest_index_attempt": { "id": 10, "status": "success" }
    },
    {
      "cc_pair_id": 2,
      "name": "Team Drive",
      "source": "google_drive",
      "access_type": "sync",
      "cc_pair_status": "INITIAL_INDEXING"
    }
  ],
  "editable_indexing_statuses": [],
  "federated_connectors": [
    { "id": 7, "name": "Live Slack", "source": "federated_slack" }
  ]
}"#;

/// Write `contents` to `name` inside a fresh temporary directory
///
/// The directory is returned so it outlives the test body.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
