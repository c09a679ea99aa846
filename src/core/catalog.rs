//! Catalog of roadmap paths
//!
//! The catalog is a static, read-only data feed loaded once at startup. The
//! core never mutates it; unknown slugs and node ids are simply absent.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::models::RoadmapPath;

/// Built-in demo feed used when no catalog file is configured.
const CATALOG_DEFAULTS: &str = include_str!("../assets/paths.json");

/// Top-level shape of the catalog feed
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PathsData {
    /// All roadmap paths in the feed
    #[serde(default)]
    paths: Vec<RoadmapPath>,
}

/// A read-only collection of roadmap paths keyed by slug
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: Vec<RoadmapPath>,
}

impl Catalog {
    /// Parse a catalog from a JSON feed shaped as `{"paths": [...]}`
    ///
    /// # Errors
    /// Returns an error if the JSON cannot be parsed into the feed shape
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: PathsData = serde_json::from_str(json)?;
        Ok(Self { paths: data.paths })
    }

    /// Load a catalog from a feed file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// The compiled-in demo catalog
    ///
    /// # Panics
    /// Panics if the compiled-in feed cannot be parsed
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(CATALOG_DEFAULTS).expect("Failed to parse compiled-in catalog feed")
    }

    /// Look up a path by slug
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&RoadmapPath> {
        self.paths.iter().find(|p| p.slug == slug)
    }

    /// All paths in feed order
    #[must_use]
    pub fn paths(&self) -> &[RoadmapPath] {
        &self.paths
    }

    /// Number of paths in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the catalog holds no paths
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for path in catalog.paths() {
            assert!(!path.slug.is_empty());
            assert!(path.node_count() > 0);
        }
    }

    #[test]
    fn test_builtin_prereqs_resolve() {
        // Every prerequisite in the demo feed should reference a node
        // somewhere in the same path.
        let catalog = Catalog::builtin();
        for path in catalog.paths() {
            for group in &path.groups {
                for node in &group.nodes {
                    for prereq in &node.prereqs {
                        assert!(
                            path.contains_node(prereq),
                            "dangling prereq {prereq} in {}",
                            path.slug
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_json_minimal() {
        let catalog = Catalog::from_json(r#"{"paths": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find("software-engineering").is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"{"paths": 3}"#).is_err());
    }

    #[test]
    fn test_find_by_slug() {
        let json = r#"{
            "paths": [{
                "slug": "software-engineering",
                "name": "Software Engineering",
                "groups": [{
                    "title": "Foundations",
                    "nodes": [{"id": "cs101", "code": "CSCI 101", "title": "Intro"}]
                }]
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let path = catalog.find("software-engineering").unwrap();
        assert_eq!(path.name, "Software Engineering");
        assert!(path.contains_node("cs101"));
    }
}
