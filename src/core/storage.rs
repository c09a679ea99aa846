//! Durable local state for the progress store
//!
//! One JSON record on disk holds all user progress plus the hidden-groups
//! list. It is rewritten whole on every store mutation and read once at
//! startup; an unreadable or unparsable file is treated as absent.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use logger::{debug, warn};

use crate::core::models::ProgressEntry;

/// Per-path progress: node id to entry (sorted for stable export output)
pub type PathEntries = BTreeMap<String, ProgressEntry>;

/// All user progress: path slug to per-path map
pub type UserProgress = HashMap<String, PathEntries>;

/// The single persisted record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Full per-path-per-node progress mapping
    #[serde(default)]
    pub user_progress: UserProgress,

    /// Titles of groups currently hidden from view
    #[serde(default)]
    pub hidden_groups: Vec<String>,
}

/// Handle to the on-disk state record
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// File name of the state record inside the data directory
    pub const FILE_NAME: &'static str = "progress.json";

    /// Create a handle for an explicit file path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a handle for the default record inside `data_dir`
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir.as_ref().join(Self::FILE_NAME))
    }

    /// Path of the underlying file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record
    ///
    /// A missing file is normal on first run. A file that exists but cannot
    /// be read or parsed is logged and treated as absent.
    #[must_use]
    pub fn load(&self) -> Option<PersistedState> {
        if !self.path.exists() {
            debug!("No state file at {}", self.path.display());
            return None;
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!(
                        "State file {} is not valid, starting fresh: {e}",
                        self.path.display()
                    );
                    None
                }
            },
            Err(e) => {
                warn!("Cannot read state file {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Write the persisted record, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written
    pub fn save(&self, state: &PersistedState) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| format!("Failed to serialize state: {e}"))?;
        fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NodeStatus;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::in_dir(dir.path());
        assert!(file.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::in_dir(dir.path());

        let mut state = PersistedState::default();
        state
            .user_progress
            .entry("software-engineering".to_string())
            .or_default()
            .insert(
                "cs101".to_string(),
                ProgressEntry::now(NodeStatus::Completed),
            );
        state.hidden_groups.push("Capstone".to_string());

        file.save(&state).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded.hidden_groups, vec!["Capstone"]);
        let entries = &loaded.user_progress["software-engineering"];
        assert_eq!(entries["cs101"].status, NodeStatus::Completed);
    }

    #[test]
    fn test_corrupt_file_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::in_dir(dir.path());
        fs::write(file.path(), "{ definitely not json").unwrap();
        assert!(file.load().is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::new(dir.path().join("nested").join("progress.json"));
        file.save(&PersistedState::default()).unwrap();
        assert!(file.path().exists());
    }
}
