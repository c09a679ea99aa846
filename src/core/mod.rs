//! Core module: everything that is not presentation.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod layout;
pub mod models;
pub mod share;
pub mod storage;
pub mod store;

/// Returns the current version of the `RoadmapTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
