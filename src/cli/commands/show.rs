//! `show` command: one path as a checklist, optionally with its layout

use roadmap_tracker::config::Config;
use roadmap_tracker::layout::{layout_path, PathLayout};
use roadmap_tracker::models::{NodeKind, RoadmapPath};
use roadmap_tracker::store::ProgressStore;

use super::{load_catalog, open_store};

/// Render one path as a grouped checklist
///
/// `--toggle-group` flips a group's hidden flag before rendering; hidden
/// groups are collapsed to a single line. `--graph` appends the computed
/// layout (levels, coordinates, edges).
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, the slug is unknown,
/// or the toggled group does not exist in the path
pub fn run(
    config: &Config,
    slug: &str,
    graph: bool,
    toggle_group: Option<&str>,
) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let path = catalog
        .find(slug)
        .ok_or_else(|| format!("Unknown path: '{slug}'"))?;

    let mut store = open_store(config);
    if let Some(title) = toggle_group {
        if path.find_group(title).is_none() {
            return Err(format!("No group titled '{title}' in '{slug}'"));
        }
        store.toggle_group_visibility(title);
        if store.is_group_hidden(title) {
            println!("✓ Group '{title}' hidden");
        } else {
            println!("✓ Group '{title}' shown");
        }
    }

    render_checklist(path, &store);

    if graph {
        render_layout(&layout_path(path));
    }

    Ok(())
}

fn render_checklist(path: &RoadmapPath, store: &ProgressStore) {
    println!("\n{} ({})", path.name, path.slug);
    if !path.goal.is_empty() {
        println!("Goal: {}", path.goal);
    }
    if !path.core_emphasis.is_empty() {
        println!("Emphasis: {}", path.core_emphasis.join(", "));
    }

    let summary = store.path_progress(&path.slug, &path.all_node_ids());
    println!(
        "Progress: {}/{} ({}%)",
        summary.completed, summary.total, summary.percentage
    );

    for group in &path.groups {
        if store.is_group_hidden(&group.title) {
            println!("\n{} [hidden]", group.title);
            continue;
        }

        let group_summary = store.group_progress(&path.slug, &group.node_ids());
        println!(
            "\n{} ({}/{}, {}%)",
            group.title, group_summary.completed, group_summary.total, group_summary.percentage
        );

        for node in &group.nodes {
            let status = store.get_status(&path.slug, &node.id);
            let kind_note = match node.kind {
                NodeKind::Core => "",
                NodeKind::Elective => " (elective)",
            };
            println!("  [{}] {:<10} {}{kind_note}", status.glyph(), node.code, node.title);
            if !node.prereqs.is_empty() {
                println!("      requires: {}", node.prereqs.join(", "));
            }
        }
    }
}

fn render_layout(layout: &PathLayout) {
    println!("\nLayout:");
    for placed in &layout.nodes {
        println!(
            "  {:<10} level {}  ({:>7.1}, {:>7.1})  {}",
            placed.id, placed.level, placed.position.x, placed.position.y, placed.group_title
        );
    }

    println!("\nEdges:");
    if layout.edges.is_empty() {
        println!("  (none)");
    }
    for edge in &layout.edges {
        println!("  {} -> {}", edge.source, edge.target);
    }
}
