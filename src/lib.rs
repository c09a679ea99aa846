//! Shared library for `RoadmapTracker`
//! Contains the catalog, progress store, and layout logic used by the CLI.

pub mod core;

pub use crate::core::config;
pub use crate::core::{backend, catalog, layout, models, share, storage, store};
