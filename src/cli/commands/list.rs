//! `list` command: all paths with rolled-up progress

use roadmap_tracker::config::Config;

use super::{load_catalog, open_store};

/// Print every catalog path with its completion rollup
///
/// # Errors
/// Returns an error if the catalog cannot be loaded
pub fn run(config: &Config) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let store = open_store(config);

    if catalog.is_empty() {
        println!("No paths in the catalog");
        return Ok(());
    }

    println!("{:<24} {:<36} Progress", "Slug", "Name");
    for path in catalog.paths() {
        let summary = store.path_progress(&path.slug, &path.all_node_ids());
        println!(
            "{:<24} {:<36} {}/{} ({}%)",
            path.slug, path.name, summary.completed, summary.total, summary.percentage
        );
    }

    Ok(())
}
