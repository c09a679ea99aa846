//! `progress` command: export, import, share, and backend sync

use std::fs;

use roadmap_tracker::backend::LogOnlyBackend;
use roadmap_tracker::config::Config;

use crate::args::ProgressSubcommand;

use super::{load_catalog, open_store};

/// Dispatch progress subcommands
///
/// # Errors
/// Returns an error when the subcommand cannot complete (unknown slug,
/// unreadable file, malformed payload)
pub fn run(config: &Config, subcommand: ProgressSubcommand) -> Result<(), String> {
    match subcommand {
        ProgressSubcommand::Export { slug, output } => export(config, &slug, output.as_deref()),
        ProgressSubcommand::Import { slug, input } => import(config, &slug, &input),
        ProgressSubcommand::Share { slug } => share(config, &slug),
        ProgressSubcommand::Load { url } => load(config, &url),
        ProgressSubcommand::Sync { slug } => sync(config, &slug),
        ProgressSubcommand::Pull { slug } => pull(config, &slug),
    }
}

fn export(config: &Config, slug: &str, output: Option<&std::path::Path>) -> Result<(), String> {
    let store = open_store(config);
    let json = store.export_progress(slug);

    match output {
        Some(file) => {
            fs::write(file, &json)
                .map_err(|e| format!("Failed to write '{}': {e}", file.display()))?;
            println!("✓ Exported progress for {slug} to {}", file.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn import(config: &Config, slug: &str, input: &std::path::Path) -> Result<(), String> {
    let data = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read '{}': {e}", input.display()))?;

    let mut store = open_store(config);
    if store.import_progress(slug, &data) {
        println!("✓ Imported progress for {slug}");
        Ok(())
    } else {
        Err(format!(
            "'{}' is not a valid progress export",
            input.display()
        ))
    }
}

fn share(config: &Config, slug: &str) -> Result<(), String> {
    // Fail on unknown slugs instead of emitting an empty share link.
    let catalog = load_catalog(config)?;
    if catalog.find(slug).is_none() {
        return Err(format!("Unknown path: '{slug}'"));
    }

    let store = open_store(config);
    println!(
        "{}",
        store.generate_shareable_url(&config.share.base_url, slug)
    );
    Ok(())
}

fn load(config: &Config, url: &str) -> Result<(), String> {
    let mut store = open_store(config);
    if store.load_from_shareable_url(url) {
        println!("✓ Applied shared progress");
        Ok(())
    } else {
        Err("URL does not carry a valid share payload".to_string())
    }
}

fn sync(config: &Config, slug: &str) -> Result<(), String> {
    let store = open_store(config);
    let backend = LogOnlyBackend::new(config.sync.endpoint.clone());
    if store.sync_to_backend(&backend, slug) {
        println!("✓ Synced progress for {slug}");
        Ok(())
    } else {
        Err(format!("Backend sync failed for {slug}"))
    }
}

fn pull(config: &Config, slug: &str) -> Result<(), String> {
    let mut store = open_store(config);
    let backend = LogOnlyBackend::new(config.sync.endpoint.clone());
    if store.load_from_backend(&backend, slug) {
        println!("✓ Loaded progress for {slug} from backend");
    } else {
        println!("✗ Backend has no progress for {slug}");
    }
    Ok(())
}
