//! CLI command handlers for `RoadmapTracker`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod list;
pub mod mark;
pub mod progress;
pub mod show;

use std::path::PathBuf;

use roadmap_tracker::catalog::Catalog;
use roadmap_tracker::config::Config;
use roadmap_tracker::storage::StateFile;
use roadmap_tracker::store::ProgressStore;

/// Load the catalog the config points at, falling back to the compiled-in
/// demo feed when no feed file is configured
///
/// # Errors
/// Returns an error if the configured feed file cannot be read or parsed
pub fn load_catalog(config: &Config) -> Result<Catalog, String> {
    if config.paths.catalog_file.is_empty() {
        return Ok(Catalog::builtin());
    }
    Catalog::load(&config.paths.catalog_file).map_err(|e| {
        format!(
            "Failed to load catalog '{}': {e}",
            config.paths.catalog_file
        )
    })
}

/// Open the progress store bound to the configured data directory
#[must_use]
pub fn open_store(config: &Config) -> ProgressStore {
    let data_dir = if config.paths.data_dir.is_empty() {
        Config::get_roadmaps_dir().join("data")
    } else {
        PathBuf::from(&config.paths.data_dir)
    };
    ProgressStore::with_state_file(StateFile::in_dir(data_dir))
}
