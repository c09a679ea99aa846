//! `mark` command: record a status for one node

use std::str::FromStr;

use logger::warn;
use roadmap_tracker::config::Config;
use roadmap_tracker::models::NodeStatus;

use super::{load_catalog, open_store};

/// Set the status of one node and report the new path rollup
///
/// The node id is recorded even when it is not in the catalog path (the
/// catalog may be mid-update), but a warning is emitted.
///
/// # Errors
/// Returns an error for an unknown path slug or an unparsable status
pub fn run(config: &Config, slug: &str, node_id: &str, status_raw: &str) -> Result<(), String> {
    let status = NodeStatus::from_str(status_raw)?;

    let catalog = load_catalog(config)?;
    let path = catalog
        .find(slug)
        .ok_or_else(|| format!("Unknown path: '{slug}'"))?;
    if !path.contains_node(node_id) {
        warn!("Node '{node_id}' is not in the '{slug}' catalog; recording anyway");
    }

    let mut store = open_store(config);
    store.set_status(slug, node_id, status);

    let summary = store.path_progress(slug, &path.all_node_ids());
    println!("✓ {node_id} marked {status}");
    println!(
        "  {slug}: {}/{} ({}%)",
        summary.completed, summary.total, summary.percentage
    );

    Ok(())
}
