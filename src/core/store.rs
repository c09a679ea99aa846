//! Progress store
//!
//! Single source of truth for user progress across all paths. The store is
//! an owned value handed to consumers, not a global: tests run it in memory,
//! the CLI attaches a state file so every mutation is persisted best-effort.

use std::collections::BTreeMap;

use logger::{info, warn};

use crate::core::backend::ProgressBackend;
use crate::core::models::{NodeStatus, ProgressEntry, ProgressSummary, ShareableState};
use crate::core::share;
use crate::core::storage::{PathEntries, PersistedState, StateFile, UserProgress};

/// Process-wide progress state with derived metrics
#[derive(Debug, Default)]
pub struct ProgressStore {
    /// Path slug to per-node entries
    user_progress: UserProgress,
    /// Titles of groups hidden from view
    hidden_groups: Vec<String>,
    /// Persistence sink; `None` keeps the store in memory
    state_file: Option<StateFile>,
}

impl ProgressStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store bound to a state file, hydrating from it if present
    ///
    /// The state file is the sole bootstrap source of progress; a missing or
    /// unreadable file starts the store empty.
    #[must_use]
    pub fn with_state_file(state_file: StateFile) -> Self {
        let state = state_file.load().unwrap_or_default();
        Self {
            user_progress: state.user_progress,
            hidden_groups: state.hidden_groups,
            state_file: Some(state_file),
        }
    }

    /// Overwrite the status for a node, stamping the current time
    ///
    /// Creates the per-path map when absent. The node id is not validated
    /// against the catalog; that is the caller's concern.
    pub fn set_status(&mut self, path_slug: &str, node_id: &str, status: NodeStatus) {
        self.user_progress
            .entry(path_slug.to_string())
            .or_default()
            .insert(node_id.to_string(), ProgressEntry::now(status));
        self.persist();
    }

    /// Stored status for a node, or `NotStarted` when absent
    #[must_use]
    pub fn get_status(&self, path_slug: &str, node_id: &str) -> NodeStatus {
        self.user_progress
            .get(path_slug)
            .and_then(|entries| entries.get(node_id))
            .map_or(NodeStatus::NotStarted, |entry| entry.status)
    }

    /// Progress rollup over every node of a path
    ///
    /// Only `Completed` counts toward `completed`; in-progress and skipped
    /// nodes do not.
    #[must_use]
    pub fn path_progress(&self, path_slug: &str, all_node_ids: &[String]) -> ProgressSummary {
        self.summarize(path_slug, all_node_ids)
    }

    /// Progress rollup restricted to a caller-supplied subset of nodes
    #[must_use]
    pub fn group_progress(&self, path_slug: &str, node_ids: &[String]) -> ProgressSummary {
        self.summarize(path_slug, node_ids)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn summarize(&self, path_slug: &str, node_ids: &[String]) -> ProgressSummary {
        let completed = node_ids
            .iter()
            .filter(|id| self.get_status(path_slug, id) == NodeStatus::Completed)
            .count();
        let total = node_ids.len();
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * completed as f64 / total as f64).round() as u32
        };

        ProgressSummary {
            completed,
            total,
            percentage,
        }
    }

    /// Serialize the full per-node mapping for one path
    ///
    /// The payload is self-describing JSON: node id to `{status, updatedAt}`.
    #[must_use]
    pub fn export_progress(&self, path_slug: &str) -> String {
        let empty = PathEntries::new();
        let entries = self.user_progress.get(path_slug).unwrap_or(&empty);
        serde_json::to_string_pretty(entries).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace the per-path mapping with a previously exported payload
    ///
    /// Returns `false` and leaves state untouched on any parse failure. On
    /// success the whole per-path map is replaced, not merged; entries for
    /// node ids unknown to the current catalog are kept as-is by design.
    pub fn import_progress(&mut self, path_slug: &str, data: &str) -> bool {
        match serde_json::from_str::<PathEntries>(data) {
            Ok(entries) => {
                self.user_progress.insert(path_slug.to_string(), entries);
                self.persist();
                true
            }
            Err(e) => {
                info!("Rejected progress import for {path_slug}: {e}");
                false
            }
        }
    }

    /// Snapshot of non-default statuses for one path
    #[must_use]
    pub fn shareable_state(&self, path_slug: &str) -> ShareableState {
        let progress: BTreeMap<String, NodeStatus> = self
            .user_progress
            .get(path_slug)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, entry)| !entry.status.is_default())
                    .map(|(id, entry)| (id.clone(), entry.status))
                    .collect()
            })
            .unwrap_or_default();

        ShareableState {
            path_slug: path_slug.to_string(),
            progress,
        }
    }

    /// Build a shareable URL carrying the non-default progress of a path
    ///
    /// `base_url` is the site origin (e.g., `https://roadmaps.example.edu`);
    /// the URL is scoped to `/path/{slug}` with the snapshot in the `share`
    /// query parameter.
    #[must_use]
    pub fn generate_shareable_url(&self, base_url: &str, path_slug: &str) -> String {
        share::build_share_url(base_url, &self.shareable_state(path_slug))
    }

    /// Apply the snapshot embedded in a shareable URL
    ///
    /// Rebuilds full entries with fresh timestamps and replaces the per-path
    /// map for the embedded slug. Returns `false` with no mutation when the
    /// parameter is missing or the payload is malformed.
    pub fn load_from_shareable_url(&mut self, url: &str) -> bool {
        let Some(param) = share::extract_share_param(url) else {
            info!("No share parameter found in URL");
            return false;
        };

        match share::decode_share_state(&param) {
            Ok(state) => {
                let entries: PathEntries = state
                    .progress
                    .into_iter()
                    .map(|(id, status)| (id, ProgressEntry::now(status)))
                    .collect();
                self.user_progress.insert(state.path_slug, entries);
                self.persist();
                true
            }
            Err(e) => {
                info!("Rejected shared URL: {e}");
                false
            }
        }
    }

    /// Toggle a group in or out of the hidden list
    pub fn toggle_group_visibility(&mut self, group_title: &str) {
        if let Some(pos) = self.hidden_groups.iter().position(|g| g == group_title) {
            self.hidden_groups.remove(pos);
        } else {
            self.hidden_groups.push(group_title.to_string());
        }
        self.persist();
    }

    /// Whether a group is currently hidden
    #[must_use]
    pub fn is_group_hidden(&self, group_title: &str) -> bool {
        self.hidden_groups.iter().any(|g| g == group_title)
    }

    /// Titles of all hidden groups
    #[must_use]
    pub fn hidden_groups(&self) -> &[String] {
        &self.hidden_groups
    }

    /// Push one path's progress to a backend, reporting success as a bool
    pub fn sync_to_backend(&self, backend: &dyn ProgressBackend, path_slug: &str) -> bool {
        let empty = PathEntries::new();
        let entries = self.user_progress.get(path_slug).unwrap_or(&empty);
        match backend.push(path_slug, entries) {
            Ok(()) => true,
            Err(e) => {
                warn!("Backend sync failed for {path_slug}: {e}");
                false
            }
        }
    }

    /// Pull one path's progress from a backend, replacing local state when
    /// the backend has data
    ///
    /// Returns `false` when the backend fails or has nothing for this path.
    pub fn load_from_backend(&mut self, backend: &dyn ProgressBackend, path_slug: &str) -> bool {
        match backend.pull(path_slug) {
            Ok(Some(entries)) => {
                self.user_progress.insert(path_slug.to_string(), entries);
                self.persist();
                true
            }
            Ok(None) => {
                info!("Backend has no progress for {path_slug}");
                false
            }
            Err(e) => {
                warn!("Backend pull failed for {path_slug}: {e}");
                false
            }
        }
    }

    /// Best-effort write of the current state to the attached state file
    fn persist(&self) {
        if let Some(state_file) = &self.state_file {
            let snapshot = PersistedState {
                user_progress: self.user_progress.clone(),
                hidden_groups: self.hidden_groups.clone(),
            };
            if let Err(e) = state_file.save(&snapshot) {
                warn!("Failed to persist progress: {e}");
            }
        }
    }
}
