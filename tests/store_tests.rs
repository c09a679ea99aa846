//! Integration tests for the progress store, persistence, and sharing

use roadmap_tracker::catalog::Catalog;
use roadmap_tracker::layout::layout_path;
use roadmap_tracker::models::NodeStatus;
use roadmap_tracker::storage::StateFile;
use roadmap_tracker::store::ProgressStore;
use tempfile::TempDir;

const SLUG: &str = "software-engineering";

#[test]
fn test_store_persists_across_instances() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut store = ProgressStore::with_state_file(StateFile::in_dir(dir.path()));
        store.set_status(SLUG, "cs101", NodeStatus::Completed);
        store.set_status(SLUG, "cs102", NodeStatus::InProgress);
        store.toggle_group_visibility("Capstone");
    }

    // A fresh store bound to the same directory sees the same state
    let store = ProgressStore::with_state_file(StateFile::in_dir(dir.path()));
    assert_eq!(store.get_status(SLUG, "cs101"), NodeStatus::Completed);
    assert_eq!(store.get_status(SLUG, "cs102"), NodeStatus::InProgress);
    assert!(store.is_group_hidden("Capstone"));
}

#[test]
fn test_corrupt_state_file_starts_fresh() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let state_file = StateFile::in_dir(dir.path());
    std::fs::write(state_file.path(), "{ not json").expect("Failed to write");

    let store = ProgressStore::with_state_file(state_file);
    assert_eq!(store.get_status(SLUG, "cs101"), NodeStatus::NotStarted);
    assert!(store.hidden_groups().is_empty());
}

#[test]
fn test_export_import_between_stores() {
    let dir_a = TempDir::new().expect("Failed to create temp dir");
    let dir_b = TempDir::new().expect("Failed to create temp dir");

    let mut source = ProgressStore::with_state_file(StateFile::in_dir(dir_a.path()));
    source.set_status(SLUG, "cs101", NodeStatus::Completed);
    source.set_status(SLUG, "cs201", NodeStatus::Skipped);
    let payload = source.export_progress(SLUG);

    let mut target = ProgressStore::with_state_file(StateFile::in_dir(dir_b.path()));
    assert!(target.import_progress(SLUG, &payload));
    assert_eq!(target.get_status(SLUG, "cs101"), NodeStatus::Completed);
    assert_eq!(target.get_status(SLUG, "cs201"), NodeStatus::Skipped);

    // Timestamps survive the round trip verbatim
    assert_eq!(target.export_progress(SLUG), payload);
}

#[test]
fn test_share_url_between_stores() {
    let mut source = ProgressStore::new();
    source.set_status(SLUG, "cs101", NodeStatus::Completed);
    source.set_status(SLUG, "cs102", NodeStatus::InProgress);

    let url = source.generate_shareable_url("https://roadmaps.example.edu", SLUG);
    assert!(url.starts_with(&format!(
        "https://roadmaps.example.edu/path/{SLUG}?share="
    )));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut target = ProgressStore::with_state_file(StateFile::in_dir(dir.path()));
    assert!(target.load_from_shareable_url(&url));
    assert_eq!(target.get_status(SLUG, "cs101"), NodeStatus::Completed);
    assert_eq!(target.get_status(SLUG, "cs102"), NodeStatus::InProgress);

    // The shared state was persisted too
    let reopened = ProgressStore::with_state_file(StateFile::in_dir(dir.path()));
    assert_eq!(reopened.get_status(SLUG, "cs101"), NodeStatus::Completed);
}

#[test]
fn test_builtin_catalog_progress_rollup() {
    let catalog = Catalog::builtin();
    let path = catalog.find(SLUG).expect("Demo feed has the SE path");

    let mut store = ProgressStore::new();
    for id in path.groups[0].node_ids() {
        store.set_status(SLUG, &id, NodeStatus::Completed);
    }

    let group = store.group_progress(SLUG, &path.groups[0].node_ids());
    assert_eq!(group.percentage, 100);

    let whole = store.path_progress(SLUG, &path.all_node_ids());
    assert!(whole.percentage < 100);
    assert_eq!(whole.completed, path.groups[0].nodes.len());
}

#[test]
fn test_builtin_catalog_lays_out_cleanly() {
    let catalog = Catalog::builtin();
    for path in catalog.paths() {
        let layout = layout_path(path);
        assert_eq!(layout.nodes.len(), path.node_count());

        // Every edge endpoint must be a placed node
        for edge in &layout.edges {
            assert!(layout.nodes.iter().any(|n| n.id == edge.source));
            assert!(layout.nodes.iter().any(|n| n.id == edge.target));
        }
    }
}
